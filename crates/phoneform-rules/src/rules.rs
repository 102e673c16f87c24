#![forbid(unsafe_code)]

//! Locale rule tables and the validation entry point.
//!
//! Each locale maps to an ordered slice of [`Check`]s over the normalized
//! number. Checks run in definition order and every failure appends its
//! message, so extending coverage to a new locale means adding a table,
//! not branching logic.
//!
//! The "required" check is shared by every rule set and runs first: blank
//! input (empty or all formatting) fails with exactly that one message and
//! no secondary length/charset noise.

use crate::normalize::{NormalizedNumber, normalize};
use crate::result::ValidationResult;

/// Message for blank input, common to all rule sets.
pub const REQUIRED_MESSAGE: &str = "Phone number is required";

/// A single validation check: a predicate over the normalized number and
/// the message appended when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    /// Human-readable message for the error list.
    pub message: &'static str,
    /// Passes (`true`) or fails (`false`) the check.
    pub predicate: fn(&NormalizedNumber) -> bool,
}

/// An ordered set of checks for one locale tag.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    /// Canonical tag this set belongs to (`"US"`, `"TR"`, ... or
    /// `"GENERIC"` for the fallback).
    pub locale: &'static str,
    checks: &'static [Check],
}

impl RuleSet {
    /// Run every check against an already-normalized number.
    #[must_use]
    pub fn validate(&self, number: &NormalizedNumber) -> ValidationResult {
        if number.is_blank() {
            return ValidationResult::from_errors(vec![REQUIRED_MESSAGE.to_string()]);
        }
        let errors = self
            .checks
            .iter()
            .filter(|check| !(check.predicate)(number))
            .map(|check| check.message.to_string())
            .collect();
        ValidationResult::from_errors(errors)
    }

    /// The checks in evaluation order.
    #[must_use]
    pub fn checks(&self) -> &'static [Check] {
        self.checks
    }
}

// --- Predicates ---

fn digits_only(n: &NormalizedNumber) -> bool {
    n.invalid_char().is_none()
}

fn exactly_ten_digits(n: &NormalizedNumber) -> bool {
    n.digit_count() == 10
}

fn tr_mobile_prefix(n: &NormalizedNumber) -> bool {
    n.digits().starts_with('5')
}

fn gb_length(n: &NormalizedNumber) -> bool {
    matches!(n.digit_count(), 10 | 11)
}

// Eleven-digit national format carries the trunk zero; ten-digit form
// (without it) is exempt.
fn gb_trunk_zero(n: &NormalizedNumber) -> bool {
    n.digit_count() != 11 || n.digits().starts_with('0')
}

fn generic_length(n: &NormalizedNumber) -> bool {
    (7..=15).contains(&n.digit_count())
}

// --- Tables ---

static US_CHECKS: &[Check] = &[
    Check {
        message: "Phone number may only contain digits",
        predicate: digits_only,
    },
    Check {
        message: "Phone number must be 10 digits",
        predicate: exactly_ten_digits,
    },
];

static TR_CHECKS: &[Check] = &[
    Check {
        message: "Phone number may only contain digits",
        predicate: digits_only,
    },
    Check {
        message: "Phone number must be 10 digits",
        predicate: exactly_ten_digits,
    },
    Check {
        message: "Phone number must start with 5",
        predicate: tr_mobile_prefix,
    },
];

static GB_CHECKS: &[Check] = &[
    Check {
        message: "Phone number may only contain digits",
        predicate: digits_only,
    },
    Check {
        message: "Phone number must be 10 or 11 digits",
        predicate: gb_length,
    },
    Check {
        message: "Phone number must start with 0",
        predicate: gb_trunk_zero,
    },
];

static GENERIC_CHECKS: &[Check] = &[
    Check {
        message: "Phone number may only contain digits",
        predicate: digits_only,
    },
    Check {
        message: "Phone number must be between 7 and 15 digits",
        predicate: generic_length,
    },
];

static US: RuleSet = RuleSet {
    locale: "US",
    checks: US_CHECKS,
};

static TR: RuleSet = RuleSet {
    locale: "TR",
    checks: TR_CHECKS,
};

static GB: RuleSet = RuleSet {
    locale: "GB",
    checks: GB_CHECKS,
};

/// Fallback rule set for unrecognized locale tags: digits only, 7 to 15
/// digits (E.164 length bounds).
pub static GENERIC: RuleSet = RuleSet {
    locale: "GENERIC",
    checks: GENERIC_CHECKS,
};

/// Resolve a locale tag to its rule set.
///
/// Matching is case-insensitive and tolerant of the common region
/// spellings (`"US"`, `"en-US"`, `"tr_TR"`). Unknown tags resolve to
/// [`GENERIC`]; resolution never fails.
#[must_use]
pub fn rule_set_for(locale: &str) -> &'static RuleSet {
    let tag = locale.trim().replace('_', "-").to_ascii_uppercase();
    match tag.as_str() {
        "US" | "EN-US" => &US,
        "TR" | "TR-TR" => &TR,
        "GB" | "EN-GB" | "UK" => &GB,
        _ => &GENERIC,
    }
}

/// Validate raw phone text against the rule set for `locale`.
///
/// Pure and deterministic: no side effects, no shared state, safe to call
/// from any number of independent widget instances.
#[must_use]
pub fn validate(text: &str, locale: &str) -> ValidationResult {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("validate", locale, len = text.len()).entered();

    rule_set_for(locale).validate(&normalize(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_us_is_required_only() {
        let result = validate("", "US");
        assert!(!result.is_valid());
        assert_eq!(result.errors(), [REQUIRED_MESSAGE]);
    }

    #[test]
    fn whitespace_only_is_required_only() {
        let result = validate("   ", "US");
        assert_eq!(result.errors(), [REQUIRED_MESSAGE]);
    }

    #[test]
    fn valid_us_number() {
        let result = validate("5551234567", "US");
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn formatted_us_number_is_valid() {
        assert!(validate("555-123-4567", "US").is_valid());
        assert!(validate("(555) 123-4567", "US").is_valid());
    }

    #[test]
    fn short_us_number_fails_length_only() {
        let result = validate("12", "US");
        assert_eq!(result.errors(), ["Phone number must be 10 digits"]);
    }

    #[test]
    fn us_letters_fail_charset() {
        let result = validate("555-CALL-NOW", "US");
        assert!(
            result
                .errors()
                .contains(&"Phone number may only contain digits".to_string())
        );
    }

    #[test]
    fn us_errors_follow_check_order() {
        let result = validate("55x", "US");
        assert_eq!(
            result.errors(),
            [
                "Phone number may only contain digits",
                "Phone number must be 10 digits",
            ]
        );
    }

    #[test]
    fn tr_mobile_number_is_valid() {
        assert!(validate("5321234567", "TR").is_valid());
        assert!(validate("532 123 45 67", "TR").is_valid());
    }

    #[test]
    fn tr_wrong_prefix_fails() {
        let result = validate("2321234567", "TR");
        assert_eq!(result.errors(), ["Phone number must start with 5"]);
    }

    #[test]
    fn gb_accepts_both_national_lengths() {
        assert!(validate("07123456789", "GB").is_valid());
        assert!(validate("7123456789", "GB").is_valid());
    }

    #[test]
    fn gb_eleven_digits_need_trunk_zero() {
        let result = validate("17123456789", "GB");
        assert_eq!(result.errors(), ["Phone number must start with 0"]);
    }

    #[test]
    fn unknown_locale_falls_back_to_generic() {
        let set = rule_set_for("XX");
        assert_eq!(set.locale, "GENERIC");
        assert!(validate("1234567", "XX").is_valid());
        assert!(!validate("123", "XX").is_valid());
    }

    #[test]
    fn locale_lookup_is_case_insensitive() {
        assert_eq!(rule_set_for("us").locale, "US");
        assert_eq!(rule_set_for("en-us").locale, "US");
        assert_eq!(rule_set_for("tr_TR").locale, "TR");
        assert_eq!(rule_set_for("en-GB").locale, "GB");
    }

    #[test]
    fn leading_plus_does_not_trip_charset() {
        let result = validate("+5551234567", "US");
        assert_eq!(result.errors(), &[] as &[String]);
    }

    proptest! {
        #[test]
        fn validity_matches_empty_error_list(text in ".{0,32}", locale in "[A-Za-z]{0,5}") {
            let result = validate(&text, &locale);
            prop_assert_eq!(result.is_valid(), result.errors().is_empty());
        }

        #[test]
        fn validation_is_deterministic(text in ".{0,32}", locale in "[A-Za-z]{0,5}") {
            prop_assert_eq!(validate(&text, &locale), validate(&text, &locale));
        }

        #[test]
        fn arbitrary_locale_never_panics(text in ".{0,16}", locale in ".{0,16}") {
            let _ = validate(&text, &locale);
        }

        #[test]
        fn formatting_never_changes_the_verdict(digits in "[0-9]{0,16}") {
            let spaced: String = digits.chars().flat_map(|c| [c, ' ']).collect();
            prop_assert_eq!(validate(&digits, "US"), validate(&spaced, "US"));
        }
    }
}

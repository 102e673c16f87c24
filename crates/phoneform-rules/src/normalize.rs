#![forbid(unsafe_code)]

//! Phone text normalization.
//!
//! Users type formatting along with digits (`(555) 123-4567`,
//! `0555 123 45 67`). Rule checks must count digits, not raw characters,
//! so validation runs against a [`NormalizedNumber`]: formatting characters
//! stripped, an optional leading `+` recorded, and the first character that
//! is neither a digit nor formatting remembered for the character-set
//! check.

/// Characters treated as formatting and stripped before counting.
///
/// ASCII whitespace plus the common grouping punctuation: parentheses,
/// hyphen, dot, and slash.
const FORMATTING: &[char] = &['(', ')', '-', '.', '/'];

fn is_formatting(c: char) -> bool {
    c.is_ascii_whitespace() || FORMATTING.contains(&c)
}

/// The normalized form of user-entered phone text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNumber {
    digits: String,
    has_plus: bool,
    invalid_char: Option<char>,
}

impl NormalizedNumber {
    /// The digits in entry order, with all formatting removed.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Number of digits after normalization.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Whether the text carried a leading `+`.
    #[must_use]
    pub fn has_plus(&self) -> bool {
        self.has_plus
    }

    /// The first character that is neither a digit, formatting, nor a
    /// leading `+`, if any.
    #[must_use]
    pub fn invalid_char(&self) -> Option<char> {
        self.invalid_char
    }

    /// Whether the raw text contained nothing but formatting (or nothing
    /// at all). Blank input fails the shared "required" check and nothing
    /// else.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.digits.is_empty() && !self.has_plus && self.invalid_char.is_none()
    }
}

/// Normalize raw phone text for rule checking.
///
/// Deterministic and total: any string input produces a normalized form,
/// arbitrary content included.
#[must_use]
pub fn normalize(text: &str) -> NormalizedNumber {
    let mut digits = String::new();
    let mut has_plus = false;
    let mut invalid_char = None;
    let mut seen_meaningful = false;

    for c in text.chars() {
        if is_formatting(c) {
            continue;
        }
        if c == '+' && !seen_meaningful {
            // Only a leading plus is a country-code marker.
            has_plus = true;
            seen_meaningful = true;
            continue;
        }
        seen_meaningful = true;
        if c.is_ascii_digit() {
            digits.push(c);
        } else if invalid_char.is_none() {
            invalid_char = Some(c);
        }
    }

    NormalizedNumber {
        digits,
        has_plus,
        invalid_char,
    }
}

#![forbid(unsafe_code)]

//! Locale-keyed phone number validation.
//!
//! The validator is a pure function from `(raw text, locale tag)` to a
//! [`ValidationResult`]. Rule sets are data: an ordered list of
//! `(predicate, message)` checks per locale, selected by tag with a
//! documented generic fallback for unknown tags. Length and character-set
//! checks run against a normalized form (formatting characters stripped),
//! never against the raw text.
//!
//! # Example
//!
//! ```rust
//! use phoneform_rules::validate;
//!
//! let result = validate("555-123-4567", "US");
//! assert!(result.is_valid());
//!
//! let result = validate("12", "US");
//! assert_eq!(result.errors(), ["Phone number must be 10 digits"]);
//! ```

pub mod normalize;
pub mod result;
pub mod rules;

pub use normalize::{NormalizedNumber, normalize};
pub use result::ValidationResult;
pub use rules::{Check, RuleSet, rule_set_for, validate};

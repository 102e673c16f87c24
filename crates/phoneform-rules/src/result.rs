#![forbid(unsafe_code)]

//! Validation outcome value type.

/// The outcome of validating a phone number against a rule set.
///
/// Validity is derived from the error list: a result is valid iff it
/// carries no error messages. Storing only the messages makes the
/// `is_valid == errors.is_empty()` invariant hold by construction — there
/// is no separate flag that could disagree with the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    /// A valid result with no errors.
    #[must_use]
    pub fn ok() -> Self {
        Self::default()
    }

    /// Build a result from failed-check messages, in check order.
    ///
    /// An empty vector produces a valid result.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// Whether every check passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in check-definition order. Empty when valid.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

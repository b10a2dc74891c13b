use thiserror::Error;

/// Errors that can occur when constructing rates or computing checked totals.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TallyError {
    /// One or more input validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Exchange rate or currency code is unusable.
    #[error("currency error: {0}")]
    Currency(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "lines[2].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

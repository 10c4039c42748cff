/// Convenience result type used across the crate.
pub type LegacyResult<T> = Result<T, LegacyError>;

/// Crate-level error type.
///
/// Only construction-time inputs (control tables, catalogs, configuration) can fail. Everything
/// evaluated per scroll tick is total and never produces this error.
#[derive(thiserror::Error, Debug)]
pub enum LegacyError {
    /// Input data failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Catalog could not be loaded or violates its invariants.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LegacyError {
    /// Build a [`LegacyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LegacyError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`LegacyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LegacyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

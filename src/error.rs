//! Error types for the storefront results crate.
//!
//! The crate uses a hierarchical error system:
//! - `StorefrontError` is the top-level error returned by all fallible APIs
//! - Specific error types (`ValidationError`, `SourceError`) provide detail
//!
//! View building itself never fails. Errors only come from loading
//! configuration and from talking to the upstream result source.
//!
//! # Error Handling Pattern
//! ```rust,ignore
//! use storefront::{Config, ResultsPage, Result, StaticSource};
//!
//! fn example() -> Result<()> {
//!     let config = Config::from_file("./storefront.json")?;
//!     let page = ResultsPage::new(config, StaticSource::default())?;
//!     let views = page.render()?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Top-level error enum for all storefront operations.
///
/// This is the only error type returned by public APIs.
/// Use pattern matching to handle specific error cases.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of what's wrong with the configuration.
        reason: String,
    },

    /// Upstream result source error.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// General I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorefrontError {
    /// Creates a configuration error with the given reason.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns true if this is a result source error.
    pub fn is_source(&self) -> bool {
        matches!(self, Self::Source(_))
    }
}

/// Errors raised by upstream result sources and the result feed.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The other end of the result feed has been dropped.
    #[error("Result feed closed")]
    Closed,

    /// A thread panicked while holding the shared result set.
    #[error("Result set lock poisoned")]
    LockPoisoned,

    /// The pipeline response does not have the expected shape.
    #[error("Malformed pipeline response: {0}")]
    Malformed(String),
}

impl SourceError {
    /// Creates a malformed response error with the given reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}

/// Validation errors for configuration data.
///
/// These errors indicate problems with values provided by the caller.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A field has an invalid value.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Name of the invalid field.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },

    /// A required field is missing or empty.
    #[error("Required field missing: {field}")]
    RequiredField {
        /// Name of the missing field.
        field: String,
    },
}

impl ValidationError {
    /// Creates an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a required field error.
    pub fn required_field(field: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::config("file is empty");
        assert_eq!(err.to_string(), "Configuration error: file is empty");
        assert!(err.is_config());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::invalid_field("results_per_page", "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid field 'results_per_page': must be greater than 0"
        );
    }

    #[test]
    fn test_required_field_display() {
        let err = ValidationError::required_field("pipeline.account");
        assert_eq!(err.to_string(), "Required field missing: pipeline.account");
    }

    #[test]
    fn test_source_error_display() {
        let err: StorefrontError = SourceError::malformed("expected an object").into();
        assert_eq!(
            err.to_string(),
            "Source error: Malformed pipeline response: expected an object"
        );
        assert!(err.is_source());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_is_validation() {
        let err: StorefrontError = ValidationError::required_field("fields.title").into();
        assert!(err.is_validation());
        assert!(!err.is_source());
    }

    #[test]
    fn test_json_error_conversion() {
        fn inner() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{not json")?)
        }

        let err = inner().unwrap_err();
        assert!(matches!(err, StorefrontError::Json(_)));
    }

    #[test]
    fn test_error_conversion_chain() {
        fn inner() -> Result<()> {
            Err(SourceError::Closed)?
        }

        let result = inner();
        assert!(result.unwrap_err().is_source());
    }
}

//! Error types for the feedback widget.
//!
//! Split along the widget's two request-time failure seams: invalid
//! submissions (recovered locally, rendered as a correction prompt) and
//! persistence callback failures (logged server-side, rendered as a
//! generic failure fragment). Configuration errors are separate and
//! fatal at construction time, never at request time.

use thiserror::Error;

/// Boxed error type the host's persistence callback may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while extracting a submission from a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The feedback text field was missing or empty after trimming.
    #[error("feedback text must not be empty")]
    EmptyText,
}

/// The host-supplied persistence callback failed.
///
/// Never retried by the widget; retry policy, if any, belongs to the
/// callback itself. The wrapped cause stays server-side — the browser
/// only ever sees a generic failure fragment.
#[derive(Debug, Error)]
#[error("persistence callback failed: {source}")]
pub struct PersistenceError {
    #[source]
    pub source: BoxError,
}

/// Errors raised when constructing a widget from invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("widget config validation failed: {message}")]
    Invalid { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field_contract() {
        assert_eq!(
            ValidationError::EmptyText.to_string(),
            "feedback text must not be empty"
        );
    }

    #[test]
    fn persistence_error_keeps_its_source() {
        let err = PersistenceError {
            source: "database unavailable".into(),
        };
        assert!(err.to_string().contains("database unavailable"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

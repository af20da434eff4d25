//! Unified error handling for Timetable Core.
//!
//! Wraps domain and application errors behind one type with a display
//! category and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Timetable Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimetableError {
    /// Malformed raw values (times, durations, day ids).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Rejected requests and storage failures.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl TimetableError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check the configuration file and TIMETABLE_* variables".into(),
                "Try: timetable config list".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in Timetable".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Messages to put in the `errors` field of a failure envelope.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Application(ApplicationError::Validation(errors)) => errors.messages().to_vec(),
            other => vec![other.to_string()],
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Storage,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type TimetableResult<T> = Result<T, TimetableError>;

// ============================================================================
// domain/error.rs - DOMAIN VALUE ERRORS
// ============================================================================

use thiserror::Error;

/// Errors raised while building domain values from raw input.
///
/// Business-rule violations on whole entities are not errors at this level:
/// validators report them as message lists (see
/// `crate::application::validators`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Parsing Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid time of day '{value}': expected HH:MM")]
    InvalidTimeOfDay { value: String },

    #[error("invalid duration '{value}': expected HH:MM")]
    InvalidDuration { value: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("no school day with id {id}")]
    UnknownDay { id: i64 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTimeOfDay { value } => vec![
                format!("'{}' is not a time of day", value),
                "Use a 24-hour clock, e.g. 08:30 or 17:00".into(),
            ],
            Self::InvalidDuration { value } => vec![
                format!("'{}' is not a duration", value),
                "Weekly hours are written as hours and minutes, e.g. 04:30".into(),
            ],
            Self::UnknownDay { id } => vec![
                format!("Day {} does not exist", id),
                "Try: timetable days".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTimeOfDay { .. } | Self::InvalidDuration { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownDay { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

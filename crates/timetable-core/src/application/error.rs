//! Application layer errors.
//!
//! Exactly two failure kinds leave a service:
//! - [`ValidationErrors`]: the request was rejected by business rules.
//! - [`StorageError`]: a repository could not do its job.
//!
//! Clients treat them differently (client error vs server error), so they
//! are never merged.

use thiserror::Error;

use crate::error::ErrorCategory;

/// A repository failure. Carries one human-readable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct StorageError {
    pub message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Ordered business-rule violations. Displays as the messages joined by `,`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .0.join(","))]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

/// Errors returned by application services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The request broke one or more business rules.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// The storage collaborator failed.
    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors
                .messages()
                .iter()
                .map(|m| format!("  \u{2022} {}", m))
                .collect(),
            Self::Storage(e) => vec![
                format!("Storage reported: {}", e.message),
                "Check that the data file is readable and writable".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Storage(_) => ErrorCategory::Storage,
        }
    }
}

/// Result of a repository call.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result of a service call.
pub type ServiceResult<T> = Result<T, ApplicationError>;

/// Extension trait turning foreign errors into a [`StorageError`] with context.
pub trait StorageContext<T> {
    fn storage_context(self, msg: impl Into<String>) -> StorageResult<T>;
}

impl<T, E> StorageContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn storage_context(self, msg: impl Into<String>) -> StorageResult<T> {
        self.map_err(|e| StorageError::new(format!("{}: {}", msg.into(), e)))
    }
}

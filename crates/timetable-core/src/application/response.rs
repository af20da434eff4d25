//! Outbound response envelope.
//!
//! Driving adapters (CLI, HTTP) render every service outcome as
//! `{ "value": ..., "errors": ... }`:
//!
//! | Outcome            | `value` | `errors`          | status |
//! |--------------------|---------|-------------------|--------|
//! | success            | payload | `null`            | 200    |
//! | validation failure | `null`  | array of messages | 400    |
//! | storage failure    | `null`  | single message    | 500    |

use serde::{Serialize, Serializer};

use crate::application::{ApplicationError, ServiceResult};

/// Tagged outcome of a service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<T> {
    Success(T),
    ValidationFailure(Vec<String>),
    StorageFailure(String),
}

impl<T> Response<T> {
    /// HTTP-equivalent status code.
    pub fn status(&self) -> u16 {
        match self {
            Self::Success(_) => 200,
            Self::ValidationFailure(_) => 400,
            Self::StorageFailure(_) => 500,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<ServiceResult<T>> for Response<T> {
    fn from(result: ServiceResult<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(ApplicationError::Validation(errors)) => {
                Self::ValidationFailure(errors.into_messages())
            }
            Err(ApplicationError::Storage(e)) => Self::StorageFailure(e.message),
        }
    }
}

impl<T: Serialize> Serialize for Response<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(untagged)]
        enum Errors<'a> {
            List(&'a [String]),
            Message(&'a str),
        }

        #[derive(Serialize)]
        struct Envelope<'a, V> {
            value: Option<&'a V>,
            errors: Option<Errors<'a>>,
        }

        let envelope = match self {
            Self::Success(value) => Envelope {
                value: Some(value),
                errors: None,
            },
            Self::ValidationFailure(messages) => Envelope {
                value: None,
                errors: Some(Errors::List(messages)),
            },
            Self::StorageFailure(message) => Envelope {
                value: None,
                errors: Some(Errors::Message(message)),
            },
        };
        envelope.serialize(serializer)
    }
}

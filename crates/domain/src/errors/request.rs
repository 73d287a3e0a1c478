//! Authorization and request-shape failures raised before any use case runs.

use super::status::{ErrorStatus, StatusError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid private key.")]
pub struct InvalidPrivateKeyError;

impl ErrorStatus for InvalidPrivateKeyError {
    fn status(&self) -> StatusError {
        StatusError::Unauthorized
    }
}

/// A wire field could not be translated into its internal type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid request field {field}: {reason}.")]
pub struct InvalidRequestError {
    pub field: &'static str,
    pub reason: String,
}

impl InvalidRequestError {
    pub fn new(field: &'static str, reason: impl ToString) -> Self {
        Self {
            field,
            reason: reason.to_string(),
        }
    }
}

impl ErrorStatus for InvalidRequestError {
    fn status(&self) -> StatusError {
        StatusError::Invalid
    }
}

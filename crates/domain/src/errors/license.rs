//! License lookup and uniqueness failures.

use crate::ids::LicenseId;

use super::status::{ErrorStatus, StatusError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("License with id {id} not found.")]
pub struct LicenseNotFoundError {
    pub id: LicenseId,
}

impl LicenseNotFoundError {
    pub fn new(id: LicenseId) -> Self {
        Self { id }
    }
}

impl ErrorStatus for LicenseNotFoundError {
    fn status(&self) -> StatusError {
        StatusError::NotFound
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("This license number {license_number} already exists.")]
pub struct LicenseNumberAlreadyExistsError {
    pub license_number: String,
}

impl ErrorStatus for LicenseNumberAlreadyExistsError {
    fn status(&self) -> StatusError {
        StatusError::AlreadyExists
    }
}

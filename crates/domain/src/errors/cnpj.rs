//! CNPJ format and uniqueness failures.

use std::fmt;

use crate::value_objects::Cnpj;

use super::status::{ErrorStatus, StatusError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCnpjMotive {
    InvalidFormat,
}

impl fmt::Display for InvalidCnpjMotive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidFormat => "in invalid format",
        })
    }
}

/// Carries the raw input exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid cnpj {cnpj} because {motive}.")]
pub struct InvalidCnpjError {
    pub cnpj: String,
    pub motive: InvalidCnpjMotive,
}

impl InvalidCnpjError {
    pub fn invalid_format(cnpj: impl Into<String>) -> Self {
        Self {
            cnpj: cnpj.into(),
            motive: InvalidCnpjMotive::InvalidFormat,
        }
    }
}

impl ErrorStatus for InvalidCnpjError {
    fn status(&self) -> StatusError {
        StatusError::Invalid
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("This cnpj {cnpj} already exists.")]
pub struct CnpjAlreadyExistsError {
    pub cnpj: Cnpj,
}

impl ErrorStatus for CnpjAlreadyExistsError {
    fn status(&self) -> StatusError {
        StatusError::AlreadyExists
    }
}

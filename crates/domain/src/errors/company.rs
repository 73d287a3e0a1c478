//! Company validation and lookup failures.

use std::fmt;

use crate::ids::CompanyId;

use super::status::{ErrorStatus, StatusError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Company with id {id} not found.")]
pub struct CompanyNotFoundError {
    pub id: CompanyId,
}

impl CompanyNotFoundError {
    pub fn new(id: CompanyId) -> Self {
        Self { id }
    }
}

impl ErrorStatus for CompanyNotFoundError {
    fn status(&self) -> StatusError {
        StatusError::NotFound
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("This corporate name {corporate_name} is invalid.")]
pub struct InvalidCorporateNameError {
    pub corporate_name: String,
}

impl ErrorStatus for InvalidCorporateNameError {
    fn status(&self) -> StatusError {
        StatusError::Invalid
    }
}

/// Why an address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCompanyAddressMotive {
    ZipCodeInvalidFormat,
    ZipCodeNotFound,
    CityNameEmpty,
    StateNameEmpty,
    StreetNameEmpty,
    NeighborhoodNameEmpty,
}

impl fmt::Display for InvalidCompanyAddressMotive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ZipCodeInvalidFormat => "zip code in invalid format",
            Self::ZipCodeNotFound => "zip code not found",
            Self::CityNameEmpty => "city name is empty",
            Self::StateNameEmpty => "state name is empty",
            Self::StreetNameEmpty => "street name is empty",
            Self::NeighborhoodNameEmpty => "neighborhood name is empty",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid company address because {motive}.")]
pub struct InvalidCompanyAddressError {
    pub motive: InvalidCompanyAddressMotive,
}

impl InvalidCompanyAddressError {
    pub fn new(motive: InvalidCompanyAddressMotive) -> Self {
        Self { motive }
    }
}

impl ErrorStatus for InvalidCompanyAddressError {
    fn status(&self) -> StatusError {
        StatusError::Invalid
    }
}

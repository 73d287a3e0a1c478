//! Failure sets of the company use cases.
//!
//! Each enum is closed: it lists exactly the records its use case can
//! return, and maps each to its status tag.

use envlicense_domain::{
    CnpjAlreadyExistsError, CompanyNotFoundError, ErrorStatus, InvalidCnpjError,
    InvalidCompanyAddressError, InvalidCorporateNameError, ProviderError, RepositoryError,
    StatusError, StoreError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCompanyError {
    #[error(transparent)]
    InvalidCnpj(#[from] InvalidCnpjError),
    #[error(transparent)]
    InvalidCorporateName(#[from] InvalidCorporateNameError),
    #[error(transparent)]
    InvalidAddress(#[from] InvalidCompanyAddressError),
    #[error(transparent)]
    CnpjAlreadyExists(#[from] CnpjAlreadyExistsError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<StoreError> for CreateCompanyError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Repository(e) => Self::Repository(e),
            StoreError::Provider(e) => Self::Provider(e),
        }
    }
}

impl ErrorStatus for CreateCompanyError {
    fn status(&self) -> StatusError {
        match self {
            Self::InvalidCnpj(e) => e.status(),
            Self::InvalidCorporateName(e) => e.status(),
            Self::InvalidAddress(e) => e.status(),
            Self::CnpjAlreadyExists(e) => e.status(),
            Self::Repository(e) => e.status(),
            Self::Provider(e) => e.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetCompanyError {
    #[error(transparent)]
    NotFound(#[from] CompanyNotFoundError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorStatus for GetCompanyError {
    fn status(&self) -> StatusError {
        match self {
            Self::NotFound(e) => e.status(),
            Self::Repository(e) => e.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateCompanyError {
    #[error(transparent)]
    NotFound(#[from] CompanyNotFoundError),
    #[error(transparent)]
    InvalidCorporateName(#[from] InvalidCorporateNameError),
    #[error(transparent)]
    InvalidAddress(#[from] InvalidCompanyAddressError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ErrorStatus for UpdateCompanyError {
    fn status(&self) -> StatusError {
        match self {
            Self::NotFound(e) => e.status(),
            Self::InvalidCorporateName(e) => e.status(),
            Self::InvalidAddress(e) => e.status(),
            Self::Repository(e) => e.status(),
            Self::Provider(e) => e.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteCompanyError {
    #[error(transparent)]
    NotFound(#[from] CompanyNotFoundError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorStatus for DeleteCompanyError {
    fn status(&self) -> StatusError {
        match self {
            Self::NotFound(e) => e.status(),
            Self::Repository(e) => e.status(),
        }
    }
}

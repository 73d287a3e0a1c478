//! Failure sets of the license use cases.

use envlicense_domain::{
    CompanyNotFoundError, ErrorStatus, LicenseNotFoundError, LicenseNumberAlreadyExistsError,
    ProviderError, RepositoryError, StatusError, StoreError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateLicenseError {
    #[error(transparent)]
    CompanyNotFound(#[from] CompanyNotFoundError),
    #[error(transparent)]
    LicenseNumberAlreadyExists(#[from] LicenseNumberAlreadyExistsError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<StoreError> for CreateLicenseError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Repository(e) => Self::Repository(e),
            StoreError::Provider(e) => Self::Provider(e),
        }
    }
}

impl ErrorStatus for CreateLicenseError {
    fn status(&self) -> StatusError {
        match self {
            Self::CompanyNotFound(e) => e.status(),
            Self::LicenseNumberAlreadyExists(e) => e.status(),
            Self::Repository(e) => e.status(),
            Self::Provider(e) => e.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetLicenseError {
    #[error(transparent)]
    NotFound(#[from] LicenseNotFoundError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorStatus for GetLicenseError {
    fn status(&self) -> StatusError {
        match self {
            Self::NotFound(e) => e.status(),
            Self::Repository(e) => e.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateLicenseError {
    #[error(transparent)]
    NotFound(#[from] LicenseNotFoundError),
    #[error(transparent)]
    LicenseNumberAlreadyExists(#[from] LicenseNumberAlreadyExistsError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorStatus for UpdateLicenseError {
    fn status(&self) -> StatusError {
        match self {
            Self::NotFound(e) => e.status(),
            Self::LicenseNumberAlreadyExists(e) => e.status(),
            Self::Repository(e) => e.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteLicenseError {
    #[error(transparent)]
    NotFound(#[from] LicenseNotFoundError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorStatus for DeleteLicenseError {
    fn status(&self) -> StatusError {
        match self {
            Self::NotFound(e) => e.status(),
            Self::Repository(e) => e.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envlicense_domain::{CompanyId, ProviderMethod, ProviderName};

    #[test]
    fn test_create_license_statuses() {
        let err = CreateLicenseError::from(CompanyNotFoundError::new(CompanyId::new("c-9")));
        assert_eq!(err.status(), StatusError::NotFound);
        assert_eq!(err.to_string(), "Company with id c-9 not found.");

        let err = CreateLicenseError::from(StoreError::from(ProviderError::new(
            ProviderName::Crypto,
            ProviderMethod::GenerateId,
        )));
        assert!(matches!(err, CreateLicenseError::Provider(_)));
        assert_eq!(err.status(), StatusError::ProviderError);
    }

    #[test]
    fn test_update_license_conflict_is_already_exists() {
        let err = UpdateLicenseError::from(LicenseNumberAlreadyExistsError {
            license_number: "LO-1".to_string(),
        });
        assert_eq!(err.status(), StatusError::AlreadyExists);
    }
}

//! Error taxonomy.
//!
//! Every failure the service reports is one of the records below. Each has a
//! fixed [`StatusError`] tag and a human-readable `Display` message; use
//! cases combine them into closed enums and callers match exhaustively.

mod cnpj;
mod collaborator;
mod company;
mod license;
mod request;
mod status;

pub use cnpj::{CnpjAlreadyExistsError, InvalidCnpjError, InvalidCnpjMotive};
pub use collaborator::{
    ProviderError, ProviderMethod, ProviderName, RepositoryError, RepositoryMethod,
    RepositoryName, StoreError,
};
pub use company::{
    CompanyNotFoundError, InvalidCompanyAddressError, InvalidCompanyAddressMotive,
    InvalidCorporateNameError,
};
pub use license::{LicenseNotFoundError, LicenseNumberAlreadyExistsError};
pub use request::{InvalidPrivateKeyError, InvalidRequestError};
pub use status::{ErrorStatus, StatusError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{CompanyId, LicenseId};
    use crate::value_objects::Cnpj;

    #[test]
    fn test_not_found_messages() {
        let company = CompanyNotFoundError::new(CompanyId::new("c-1"));
        assert_eq!(company.to_string(), "Company with id c-1 not found.");
        assert_eq!(company.status(), StatusError::NotFound);

        let license = LicenseNotFoundError::new(LicenseId::new("l-1"));
        assert_eq!(license.to_string(), "License with id l-1 not found.");
        assert_eq!(license.status(), StatusError::NotFound);
    }

    #[test]
    fn test_address_error_names_motive() {
        let err = InvalidCompanyAddressError::new(InvalidCompanyAddressMotive::ZipCodeNotFound);
        assert_eq!(
            err.to_string(),
            "Invalid company address because zip code not found."
        );
        assert_eq!(err.status(), StatusError::Invalid);
    }

    #[test]
    fn test_already_exists_errors() {
        let cnpj = Cnpj::validate("11222333000181").unwrap();
        let err = CnpjAlreadyExistsError { cnpj };
        assert_eq!(err.to_string(), "This cnpj 11222333000181 already exists.");
        assert_eq!(err.status(), StatusError::AlreadyExists);

        let err = LicenseNumberAlreadyExistsError {
            license_number: "LO-42".to_string(),
        };
        assert_eq!(err.to_string(), "This license number LO-42 already exists.");
        assert_eq!(err.status(), StatusError::AlreadyExists);
    }

    #[test]
    fn test_invalid_cnpj_keeps_raw_input() {
        let err = InvalidCnpjError::invalid_format("12.345");
        assert_eq!(err.to_string(), "Invalid cnpj 12.345 because in invalid format.");
        assert_eq!(err.status(), StatusError::Invalid);
    }

    #[test]
    fn test_private_key_is_unauthorized() {
        assert_eq!(InvalidPrivateKeyError.status(), StatusError::Unauthorized);
        assert_eq!(InvalidPrivateKeyError.to_string(), "Invalid private key.");
    }
}

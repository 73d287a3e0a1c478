//! Company entity and its field validators
//!
//! Validators are plain functions over raw input. They normalise what they
//! accept (trimming, stripping zip code punctuation) and return the first
//! failing rule.

use chrono::{DateTime, Utc};

use crate::errors::{
    InvalidCompanyAddressError, InvalidCompanyAddressMotive, InvalidCorporateNameError,
};
use crate::ids::CompanyId;
use crate::value_objects::Cnpj;

const ZIP_CODE_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: CompanyId,
    pub corporate_name: String,
    pub cnpj: Cnpj,
    pub address: CompanyAddress,
    /// Set once the company has been soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompanyAddress {
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub street: String,
    pub neighborhood: String,
    pub complement: String,
}

impl Company {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Trim a corporate name, rejecting it when nothing is left.
    pub fn validate_corporate_name(name: &str) -> Result<String, InvalidCorporateNameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(InvalidCorporateNameError {
                corporate_name: name.to_string(),
            });
        }
        Ok(trimmed.to_string())
    }

    /// Normalise an address and check its fields.
    ///
    /// The zip code must be eight digits once `-` is removed. The city,
    /// state, street and neighborhood are then checked in that order; the
    /// complement may be empty.
    pub fn validate_address(
        address: &CompanyAddress,
    ) -> Result<CompanyAddress, InvalidCompanyAddressError> {
        let normalized = CompanyAddress {
            zip_code: address.zip_code.trim().replace('-', ""),
            city: address.city.trim().to_string(),
            state: address.state.trim().to_string(),
            street: address.street.trim().to_string(),
            neighborhood: address.neighborhood.trim().to_string(),
            complement: address.complement.trim().to_string(),
        };

        let zip_is_valid = normalized.zip_code.len() == ZIP_CODE_LENGTH
            && normalized.zip_code.bytes().all(|b| b.is_ascii_digit());
        if !zip_is_valid {
            return Err(InvalidCompanyAddressError::new(
                InvalidCompanyAddressMotive::ZipCodeInvalidFormat,
            ));
        }

        let required = [
            (&normalized.city, InvalidCompanyAddressMotive::CityNameEmpty),
            (&normalized.state, InvalidCompanyAddressMotive::StateNameEmpty),
            (&normalized.street, InvalidCompanyAddressMotive::StreetNameEmpty),
            (
                &normalized.neighborhood,
                InvalidCompanyAddressMotive::NeighborhoodNameEmpty,
            ),
        ];
        if let Some((_, motive)) = required.iter().find(|(value, _)| value.is_empty()) {
            return Err(InvalidCompanyAddressError::new(*motive));
        }

        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> CompanyAddress {
        CompanyAddress {
            zip_code: "01001-000".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            street: "Praça da Sé".to_string(),
            neighborhood: "Sé".to_string(),
            complement: String::new(),
        }
    }

    #[test]
    fn test_corporate_name_is_trimmed() {
        assert_eq!(
            Company::validate_corporate_name("  Acme Ltda ").unwrap(),
            "Acme Ltda"
        );
    }

    #[test]
    fn test_blank_corporate_name_is_rejected() {
        let err = Company::validate_corporate_name("   ").unwrap_err();
        assert_eq!(err.corporate_name, "   ");
    }

    #[test]
    fn test_address_is_normalized() {
        let mut raw = address();
        raw.city = "  São Paulo  ".to_string();
        raw.complement = "  sala 2 ".to_string();

        let normalized = Company::validate_address(&raw).unwrap();
        assert_eq!(normalized.zip_code, "01001000");
        assert_eq!(normalized.city, "São Paulo");
        assert_eq!(normalized.complement, "sala 2");
    }

    #[test]
    fn test_zip_codes_not_reducing_to_eight_digits_fail() {
        for zip in ["", "0100100", "010010000", "01001-00a", "0100 1000", "01.001-000"] {
            let mut raw = address();
            raw.zip_code = zip.to_string();
            let err = Company::validate_address(&raw).unwrap_err();
            assert_eq!(err.motive, InvalidCompanyAddressMotive::ZipCodeInvalidFormat);
        }
    }

    #[test]
    fn test_zip_code_is_checked_before_fields() {
        let raw = CompanyAddress {
            zip_code: "123".to_string(),
            ..CompanyAddress::default()
        };
        let err = Company::validate_address(&raw).unwrap_err();
        assert_eq!(err.motive, InvalidCompanyAddressMotive::ZipCodeInvalidFormat);
    }

    #[test]
    fn test_empty_fields_are_reported_in_order() {
        let mut raw = CompanyAddress {
            zip_code: "01001000".to_string(),
            ..CompanyAddress::default()
        };
        let expected = [
            InvalidCompanyAddressMotive::CityNameEmpty,
            InvalidCompanyAddressMotive::StateNameEmpty,
            InvalidCompanyAddressMotive::StreetNameEmpty,
            InvalidCompanyAddressMotive::NeighborhoodNameEmpty,
        ];

        for motive in expected {
            let err = Company::validate_address(&raw).unwrap_err();
            assert_eq!(err.motive, motive);
            match motive {
                InvalidCompanyAddressMotive::CityNameEmpty => raw.city = "SP".into(),
                InvalidCompanyAddressMotive::StateNameEmpty => raw.state = "SP".into(),
                InvalidCompanyAddressMotive::StreetNameEmpty => raw.street = "Main".into(),
                _ => raw.neighborhood = "Centro".into(),
            }
        }

        assert!(Company::validate_address(&raw).is_ok());
    }

    #[test]
    fn test_whitespace_only_field_counts_as_empty() {
        let mut raw = address();
        raw.street = "   ".to_string();
        let err = Company::validate_address(&raw).unwrap_err();
        assert_eq!(err.motive, InvalidCompanyAddressMotive::StreetNameEmpty);
    }
}

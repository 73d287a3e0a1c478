//! Common builders for tests.
//!
//! Sample companies and licenses with fixed, valid field values so each test
//! only spells out what it cares about.

use chrono::{DateTime, TimeZone, Utc};

use envlicense_domain::{Cnpj, Company, CompanyAddress, CompanyId, License, LicenseId};

use crate::infrastructure::ports::ZipCodeAddress;

pub const VALID_CNPJ: &str = "11222333000181";
pub const OTHER_VALID_CNPJ: &str = "11444777000161";
pub const PRIVATE_KEY: &str = "private-key-1";

pub fn address() -> CompanyAddress {
    CompanyAddress {
        zip_code: "01001000".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        street: "Praça da Sé".to_string(),
        neighborhood: "Sé".to_string(),
        complement: String::new(),
    }
}

pub fn zip_address(zip_code: &str) -> ZipCodeAddress {
    ZipCodeAddress {
        zip_code: zip_code.to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        street: "Praça da Sé".to_string(),
        neighborhood: "Sé".to_string(),
    }
}

pub fn company(id: &str) -> Company {
    Company {
        id: CompanyId::new(id),
        corporate_name: "Acme Ltda".to_string(),
        cnpj: Cnpj::from_persisted(VALID_CNPJ),
        address: address(),
        deleted_at: None,
    }
}

pub fn deleted_company(id: &str) -> Company {
    Company {
        deleted_at: Some(instant()),
        ..company(id)
    }
}

pub fn license(id: &str, company_id: &str) -> License {
    License {
        id: LicenseId::new(id),
        license_number: "LO-2024-001".to_string(),
        environmental_agency: "CETESB".to_string(),
        emission_date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        expiration_date: Utc.with_ymd_and_hms(2028, 1, 15, 0, 0, 0).unwrap(),
        company_id: CompanyId::new(company_id),
        deleted_at: None,
    }
}

pub fn deleted_license(id: &str, company_id: &str) -> License {
    License {
        deleted_at: Some(instant()),
        ..license(id, company_id)
    }
}

/// A fixed instant used for `deleted_at` values.
pub fn instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 10, 30, 0).unwrap()
}

//! Create license use case.
//!
//! A license can only be issued to a company that exists and has not been
//! deleted, and its number must not be in use by another live license.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use envlicense_domain::{
    CompanyId, CompanyNotFoundError, LicenseId, LicenseNumberAlreadyExistsError,
};

use crate::infrastructure::ports::{CompanyRepo, LicenseRepo, NewLicense};

use super::error::CreateLicenseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLicenseInput {
    pub company_id: CompanyId,
    pub license_number: String,
    pub environmental_agency: String,
    pub emission_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
}

pub struct CreateLicense {
    companies: Arc<dyn CompanyRepo>,
    licenses: Arc<dyn LicenseRepo>,
}

impl CreateLicense {
    pub fn new(companies: Arc<dyn CompanyRepo>, licenses: Arc<dyn LicenseRepo>) -> Self {
        Self {
            companies,
            licenses,
        }
    }

    /// Returns the id assigned by the repository.
    #[tracing::instrument(
        skip(self, input),
        fields(company_id = %input.company_id, license_number = %input.license_number)
    )]
    pub async fn execute(&self, input: CreateLicenseInput) -> Result<LicenseId, CreateLicenseError> {
        match self.companies.find_by_id(&input.company_id).await? {
            Some(company) if !company.is_deleted() => {}
            _ => return Err(CompanyNotFoundError::new(input.company_id).into()),
        }

        if let Some(existing) = self
            .licenses
            .find_by_license_number(&input.license_number)
            .await?
        {
            return Err(LicenseNumberAlreadyExistsError {
                license_number: existing.license_number,
            }
            .into());
        }

        let id = self
            .licenses
            .save(&NewLicense {
                license_number: input.license_number,
                environmental_agency: input.environmental_agency,
                emission_date: input.emission_date,
                expiration_date: input.expiration_date,
                company_id: input.company_id,
            })
            .await?;
        tracing::info!(license_id = %id, "License created");

        Ok(id)
    }
}

//! Update license use case.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use envlicense_domain::{License, LicenseId, LicenseNotFoundError, LicenseNumberAlreadyExistsError};

use crate::infrastructure::ports::LicenseRepo;

use super::error::UpdateLicenseError;

/// Fields left as `None` keep the license's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseUpdate {
    pub license_number: Option<String>,
    pub environmental_agency: Option<String>,
    pub emission_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
}

pub struct UpdateLicense {
    licenses: Arc<dyn LicenseRepo>,
}

impl UpdateLicense {
    pub fn new(licenses: Arc<dyn LicenseRepo>) -> Self {
        Self { licenses }
    }

    /// Merge `update` onto the stored license and persist it.
    ///
    /// The license number is checked for collisions only when it actually
    /// changes, so resubmitting the current number is accepted.
    #[tracing::instrument(skip(self, update), fields(license_id = %id))]
    pub async fn execute(
        &self,
        id: &LicenseId,
        update: LicenseUpdate,
    ) -> Result<License, UpdateLicenseError> {
        let license = match self.licenses.find_by_id(id).await? {
            Some(license) if !license.is_deleted() => license,
            _ => return Err(LicenseNotFoundError::new(id.clone()).into()),
        };

        if let Some(number) = &update.license_number {
            if *number != license.license_number {
                if let Some(existing) = self.licenses.find_by_license_number(number).await? {
                    return Err(LicenseNumberAlreadyExistsError {
                        license_number: existing.license_number,
                    }
                    .into());
                }
            }
        }

        let merged = License {
            license_number: update.license_number.unwrap_or(license.license_number),
            environmental_agency: update
                .environmental_agency
                .unwrap_or(license.environmental_agency),
            emission_date: update.emission_date.unwrap_or(license.emission_date),
            expiration_date: update.expiration_date.unwrap_or(license.expiration_date),
            ..license
        };
        let updated = self.licenses.update(&merged).await?;
        tracing::info!("License updated");

        Ok(updated)
    }
}

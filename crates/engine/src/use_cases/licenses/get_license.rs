//! Get license use case.

use std::sync::Arc;

use envlicense_domain::{License, LicenseId, LicenseNotFoundError};

use crate::infrastructure::ports::LicenseRepo;

use super::error::GetLicenseError;

pub struct GetLicense {
    licenses: Arc<dyn LicenseRepo>,
}

impl GetLicense {
    pub fn new(licenses: Arc<dyn LicenseRepo>) -> Self {
        Self { licenses }
    }

    #[tracing::instrument(skip(self), fields(license_id = %id))]
    pub async fn execute(&self, id: &LicenseId) -> Result<License, GetLicenseError> {
        match self.licenses.find_by_id(id).await? {
            Some(license) if !license.is_deleted() => Ok(license),
            _ => Err(LicenseNotFoundError::new(id.clone()).into()),
        }
    }
}

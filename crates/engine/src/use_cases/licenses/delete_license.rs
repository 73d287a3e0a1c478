//! Delete license use case (soft delete).

use std::sync::Arc;

use envlicense_domain::{LicenseId, LicenseNotFoundError, SoftDeleted};

use crate::infrastructure::ports::LicenseRepo;

use super::error::DeleteLicenseError;

pub struct DeleteLicense {
    licenses: Arc<dyn LicenseRepo>,
}

impl DeleteLicense {
    pub fn new(licenses: Arc<dyn LicenseRepo>) -> Self {
        Self { licenses }
    }

    #[tracing::instrument(skip(self), fields(license_id = %id))]
    pub async fn execute(
        &self,
        id: &LicenseId,
    ) -> Result<SoftDeleted<LicenseId>, DeleteLicenseError> {
        match self.licenses.find_by_id(id).await? {
            Some(license) if !license.is_deleted() => {}
            _ => return Err(LicenseNotFoundError::new(id.clone()).into()),
        }

        let deleted = self.licenses.soft_delete(id).await?;
        tracing::info!(deleted_at = %deleted.deleted_at, "License soft-deleted");
        Ok(deleted)
    }
}

//! Delete company use case.
//!
//! Companies are never removed: deletion stamps `deleted_at` and every
//! later read treats the company as absent.

use std::sync::Arc;

use envlicense_domain::{CompanyId, CompanyNotFoundError, SoftDeleted};

use crate::infrastructure::ports::CompanyRepo;

use super::error::DeleteCompanyError;

pub struct DeleteCompany {
    companies: Arc<dyn CompanyRepo>,
}

impl DeleteCompany {
    pub fn new(companies: Arc<dyn CompanyRepo>) -> Self {
        Self { companies }
    }

    #[tracing::instrument(skip(self), fields(company_id = %id))]
    pub async fn execute(
        &self,
        id: &CompanyId,
    ) -> Result<SoftDeleted<CompanyId>, DeleteCompanyError> {
        match self.companies.find_by_id(id).await? {
            Some(company) if !company.is_deleted() => {}
            _ => return Err(CompanyNotFoundError::new(id.clone()).into()),
        }

        let deleted = self.companies.soft_delete(id).await?;
        tracing::info!(deleted_at = %deleted.deleted_at, "Company soft-deleted");
        Ok(deleted)
    }
}

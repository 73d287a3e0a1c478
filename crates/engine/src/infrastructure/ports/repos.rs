//! Repository port traits for database access.
//!
//! `find_by_id` returns soft-deleted rows with their `deleted_at` set; the
//! other finders only ever return live rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use envlicense_domain::{
    Cnpj, Company, CompanyAddress, CompanyId, License, LicenseId, RepositoryError, SoftDeleted,
    StoreError,
};

/// A validated company that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub corporate_name: String,
    pub cnpj: Cnpj,
    pub address: CompanyAddress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLicense {
    pub license_number: String,
    pub environmental_agency: String,
    pub emission_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    pub company_id: CompanyId,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepo: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Company>, RepositoryError>;
    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError>;
    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Company>, RepositoryError>;

    /// Persist a new company and return the id generated for it.
    async fn save(&self, company: &NewCompany) -> Result<CompanyId, StoreError>;

    /// Overwrite every field of an existing company and return the stored row.
    async fn update(&self, company: &Company) -> Result<Company, RepositoryError>;

    async fn soft_delete(&self, id: &CompanyId)
        -> Result<SoftDeleted<CompanyId>, RepositoryError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LicenseRepo: Send + Sync {
    async fn find_all(&self) -> Result<Vec<License>, RepositoryError>;
    async fn find_by_id(&self, id: &LicenseId) -> Result<Option<License>, RepositoryError>;
    async fn find_by_license_number(
        &self,
        license_number: &str,
    ) -> Result<Option<License>, RepositoryError>;
    async fn save(&self, license: &NewLicense) -> Result<LicenseId, StoreError>;
    async fn update(&self, license: &License) -> Result<License, RepositoryError>;
    async fn soft_delete(&self, id: &LicenseId)
        -> Result<SoftDeleted<LicenseId>, RepositoryError>;
}

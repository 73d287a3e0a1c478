//! List companies use case.

use std::sync::Arc;

use envlicense_domain::{Company, RepositoryError};

use crate::infrastructure::ports::CompanyRepo;

pub struct ListCompanies {
    companies: Arc<dyn CompanyRepo>,
}

impl ListCompanies {
    pub fn new(companies: Arc<dyn CompanyRepo>) -> Self {
        Self { companies }
    }

    /// Every company that has not been soft-deleted.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<Company>, RepositoryError> {
        self.companies.find_all().await
    }
}

//! List licenses use case.

use std::sync::Arc;

use envlicense_domain::{License, RepositoryError};

use crate::infrastructure::ports::LicenseRepo;

pub struct ListLicenses {
    licenses: Arc<dyn LicenseRepo>,
}

impl ListLicenses {
    pub fn new(licenses: Arc<dyn LicenseRepo>) -> Self {
        Self { licenses }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<License>, RepositoryError> {
        self.licenses.find_all().await
    }
}

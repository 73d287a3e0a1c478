//! License use cases.

use std::sync::Arc;

mod create_license;
mod delete_license;
mod error;
mod get_license;
mod list_licenses;
mod update_license;

pub use create_license::{CreateLicense, CreateLicenseInput};
pub use delete_license::DeleteLicense;
pub use error::{CreateLicenseError, DeleteLicenseError, GetLicenseError, UpdateLicenseError};
pub use get_license::GetLicense;
pub use list_licenses::ListLicenses;
pub use update_license::{LicenseUpdate, UpdateLicense};

use crate::infrastructure::ports::{CompanyRepo, LicenseRepo};

/// Container for license use cases.
pub struct LicenseUseCases {
    pub create: Arc<CreateLicense>,
    pub get: Arc<GetLicense>,
    pub list: Arc<ListLicenses>,
    pub update: Arc<UpdateLicense>,
    pub delete: Arc<DeleteLicense>,
}

impl LicenseUseCases {
    pub fn new(companies: Arc<dyn CompanyRepo>, licenses: Arc<dyn LicenseRepo>) -> Self {
        Self {
            create: Arc::new(CreateLicense::new(companies, licenses.clone())),
            get: Arc::new(GetLicense::new(licenses.clone())),
            list: Arc::new(ListLicenses::new(licenses.clone())),
            update: Arc::new(UpdateLicense::new(licenses.clone())),
            delete: Arc::new(DeleteLicense::new(licenses)),
        }
    }
}

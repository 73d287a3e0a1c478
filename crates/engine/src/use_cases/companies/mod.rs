//! Company use cases.
//!
//! Registration, lookup, partial update and soft deletion of companies.

use std::sync::Arc;

mod create_company;
mod delete_company;
mod error;
mod get_company;
mod list_companies;
mod update_company;

pub use create_company::{CreateCompany, CreateCompanyInput};
pub use delete_company::DeleteCompany;
pub use error::{CreateCompanyError, DeleteCompanyError, GetCompanyError, UpdateCompanyError};
pub use get_company::GetCompany;
pub use list_companies::ListCompanies;
pub use update_company::{CompanyAddressUpdate, CompanyUpdate, UpdateCompany};

use crate::infrastructure::ports::{AddressProvider, CompanyRepo};

/// Container for company use cases.
pub struct CompanyUseCases {
    pub create: Arc<CreateCompany>,
    pub get: Arc<GetCompany>,
    pub list: Arc<ListCompanies>,
    pub update: Arc<UpdateCompany>,
    pub delete: Arc<DeleteCompany>,
}

impl CompanyUseCases {
    pub fn new(companies: Arc<dyn CompanyRepo>, address_provider: Arc<dyn AddressProvider>) -> Self {
        Self {
            create: Arc::new(CreateCompany::new(
                companies.clone(),
                address_provider.clone(),
            )),
            get: Arc::new(GetCompany::new(companies.clone())),
            list: Arc::new(ListCompanies::new(companies.clone())),
            update: Arc::new(UpdateCompany::new(companies.clone(), address_provider)),
            delete: Arc::new(DeleteCompany::new(companies)),
        }
    }
}

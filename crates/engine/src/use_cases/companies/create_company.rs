//! Create company use case.
//!
//! Registers a company after validating its CNPJ, name and address and
//! confirming the zip code with the postal-code service.

use std::sync::Arc;

use envlicense_domain::{
    Cnpj, CnpjAlreadyExistsError, Company, CompanyAddress, InvalidCompanyAddressError,
    InvalidCompanyAddressMotive,
};

use crate::infrastructure::ports::{AddressProvider, CompanyRepo, NewCompany};

use super::error::CreateCompanyError;

/// Raw company fields as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCompanyInput {
    pub corporate_name: String,
    pub cnpj: String,
    pub address: CompanyAddress,
}

pub struct CreateCompany {
    companies: Arc<dyn CompanyRepo>,
    address_provider: Arc<dyn AddressProvider>,
}

impl CreateCompany {
    pub fn new(companies: Arc<dyn CompanyRepo>, address_provider: Arc<dyn AddressProvider>) -> Self {
        Self {
            companies,
            address_provider,
        }
    }

    /// Validate and persist a new company.
    ///
    /// Steps run in order and stop at the first failure: CNPJ, corporate
    /// name, address, zip code lookup, CNPJ uniqueness, save. The returned
    /// company is built from the validated input and the id assigned by
    /// the repository.
    #[tracing::instrument(skip(self, input), fields(cnpj = %input.cnpj))]
    pub async fn execute(&self, input: CreateCompanyInput) -> Result<Company, CreateCompanyError> {
        let cnpj = Cnpj::validate(&input.cnpj)?;
        let corporate_name = Company::validate_corporate_name(&input.corporate_name)?;
        let address = Company::validate_address(&input.address)?;

        let found = self
            .address_provider
            .get_zip_code_data(&address.zip_code)
            .await?;
        if found.is_none() {
            return Err(InvalidCompanyAddressError::new(
                InvalidCompanyAddressMotive::ZipCodeNotFound,
            )
            .into());
        }

        if self.companies.find_by_cnpj(&cnpj).await?.is_some() {
            return Err(CnpjAlreadyExistsError { cnpj }.into());
        }

        let new_company = NewCompany {
            corporate_name,
            cnpj,
            address,
        };
        let id = self.companies.save(&new_company).await?;
        tracing::info!(company_id = %id, "Company created");

        Ok(Company {
            id,
            corporate_name: new_company.corporate_name,
            cnpj: new_company.cnpj,
            address: new_company.address,
            deleted_at: None,
        })
    }
}

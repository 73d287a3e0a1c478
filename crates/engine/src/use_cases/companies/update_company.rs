//! Update company use case.
//!
//! Partial update: every field left as `None` keeps the company's current
//! value. The merged address is always revalidated, but the postal-code
//! service is only consulted when a new zip code was supplied.

use std::sync::Arc;

use envlicense_domain::{
    Company, CompanyAddress, CompanyId, CompanyNotFoundError, InvalidCompanyAddressError,
    InvalidCompanyAddressMotive,
};

use crate::infrastructure::ports::{AddressProvider, CompanyRepo};

use super::error::UpdateCompanyError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyUpdate {
    pub corporate_name: Option<String>,
    pub address: CompanyAddressUpdate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyAddressUpdate {
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub complement: Option<String>,
}

impl CompanyAddressUpdate {
    fn merge_onto(self, current: &CompanyAddress) -> CompanyAddress {
        CompanyAddress {
            zip_code: self.zip_code.unwrap_or_else(|| current.zip_code.clone()),
            city: self.city.unwrap_or_else(|| current.city.clone()),
            state: self.state.unwrap_or_else(|| current.state.clone()),
            street: self.street.unwrap_or_else(|| current.street.clone()),
            neighborhood: self
                .neighborhood
                .unwrap_or_else(|| current.neighborhood.clone()),
            complement: self.complement.unwrap_or_else(|| current.complement.clone()),
        }
    }
}

pub struct UpdateCompany {
    companies: Arc<dyn CompanyRepo>,
    address_provider: Arc<dyn AddressProvider>,
}

impl UpdateCompany {
    pub fn new(companies: Arc<dyn CompanyRepo>, address_provider: Arc<dyn AddressProvider>) -> Self {
        Self {
            companies,
            address_provider,
        }
    }

    /// Merge `update` onto the stored company, validate, and persist.
    ///
    /// Returns the company as stored by the repository.
    #[tracing::instrument(skip(self, update), fields(company_id = %id))]
    pub async fn execute(
        &self,
        id: &CompanyId,
        update: CompanyUpdate,
    ) -> Result<Company, UpdateCompanyError> {
        let company = match self.companies.find_by_id(id).await? {
            Some(company) if !company.is_deleted() => company,
            _ => return Err(CompanyNotFoundError::new(id.clone()).into()),
        };

        let corporate_name = match update.corporate_name {
            Some(name) => Company::validate_corporate_name(&name)?,
            None => company.corporate_name.clone(),
        };

        let zip_code_changed = update.address.zip_code.is_some();
        let address = Company::validate_address(&update.address.merge_onto(&company.address))?;

        if zip_code_changed {
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
        }

        let merged = Company {
            corporate_name,
            address,
            ..company
        };
        let updated = self.companies.update(&merged).await?;
        tracing::info!("Company updated");

        Ok(updated)
    }
}

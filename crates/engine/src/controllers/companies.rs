//! Company controllers.

use std::sync::Arc;

use envlicense_domain::{Company, CompanyAddress, CompanyId, RepositoryError};
use envlicense_shared::{
    AddressData, AddressUpdateData, CompanyCreatedData, CompanyData, CompanyListData,
    CreateCompanyBody, DeletedCompanyData, ResponseSuccess, SingleCompanyData, UpdateCompanyBody,
    UpdatedCompanyData,
};

use super::{
    authorize, deleted_data, timed, ControllerError, ControllerResult, HttpRequest, IdParam,
};
use crate::use_cases::companies::{
    CompanyAddressUpdate, CompanyUpdate, CompanyUseCases, CreateCompany, CreateCompanyError,
    CreateCompanyInput, DeleteCompany, DeleteCompanyError, GetCompany, GetCompanyError,
    ListCompanies, UpdateCompany, UpdateCompanyError,
};
use crate::use_cases::VerifyPrivateKey;

/// One controller per company route.
pub struct CompanyControllers {
    pub list: ListCompaniesController,
    pub get: GetCompanyController,
    pub create: CreateCompanyController,
    pub update: UpdateCompanyController,
    pub delete: DeleteCompanyController,
}

impl CompanyControllers {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_cases: &CompanyUseCases) -> Self {
        Self {
            list: ListCompaniesController::new(gate.clone(), use_cases.list.clone()),
            get: GetCompanyController::new(gate.clone(), use_cases.get.clone()),
            create: CreateCompanyController::new(gate.clone(), use_cases.create.clone()),
            update: UpdateCompanyController::new(gate.clone(), use_cases.update.clone()),
            delete: DeleteCompanyController::new(gate, use_cases.delete.clone()),
        }
    }
}

pub struct ListCompaniesController {
    gate: Arc<VerifyPrivateKey>,
    use_case: Arc<ListCompanies>,
}

impl ListCompaniesController {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_case: Arc<ListCompanies>) -> Self {
        Self { gate, use_case }
    }

    pub async fn handle(
        &self,
        request: HttpRequest,
    ) -> ControllerResult<CompanyListData, RepositoryError> {
        timed("ListCompaniesController", self.perform(request)).await
    }

    async fn perform(
        &self,
        request: HttpRequest,
    ) -> ControllerResult<CompanyListData, RepositoryError> {
        authorize(&self.gate, &request.headers)?;

        let companies = self
            .use_case
            .execute()
            .await
            .map_err(ControllerError::UseCase)?;

        Ok(ResponseSuccess::done(CompanyListData {
            companies: companies.into_iter().map(company_data).collect(),
        }))
    }
}

pub struct GetCompanyController {
    gate: Arc<VerifyPrivateKey>,
    use_case: Arc<GetCompany>,
}

impl GetCompanyController {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_case: Arc<GetCompany>) -> Self {
        Self { gate, use_case }
    }

    pub async fn handle(
        &self,
        request: HttpRequest<(), IdParam>,
    ) -> ControllerResult<SingleCompanyData, GetCompanyError> {
        timed("GetCompanyController", self.perform(request)).await
    }

    async fn perform(
        &self,
        request: HttpRequest<(), IdParam>,
    ) -> ControllerResult<SingleCompanyData, GetCompanyError> {
        authorize(&self.gate, &request.headers)?;

        let company = self
            .use_case
            .execute(&CompanyId::new(request.params.id))
            .await
            .map_err(ControllerError::UseCase)?;

        Ok(ResponseSuccess::done(SingleCompanyData {
            company: company_data(company),
        }))
    }
}

pub struct CreateCompanyController {
    gate: Arc<VerifyPrivateKey>,
    use_case: Arc<CreateCompany>,
}

impl CreateCompanyController {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_case: Arc<CreateCompany>) -> Self {
        Self { gate, use_case }
    }

    pub async fn handle(
        &self,
        request: HttpRequest<CreateCompanyBody>,
    ) -> ControllerResult<CompanyCreatedData, CreateCompanyError> {
        timed("CreateCompanyController", self.perform(request)).await
    }

    async fn perform(
        &self,
        request: HttpRequest<CreateCompanyBody>,
    ) -> ControllerResult<CompanyCreatedData, CreateCompanyError> {
        authorize(&self.gate, &request.headers)?;

        let info = request.body.company_info;
        let input = CreateCompanyInput {
            corporate_name: info.corporate_name,
            cnpj: info.cnpj,
            address: address_from_wire(info.address),
        };
        let company = self
            .use_case
            .execute(input)
            .await
            .map_err(ControllerError::UseCase)?;

        Ok(ResponseSuccess::created(CompanyCreatedData {
            company_created: company_data(company),
        }))
    }
}

pub struct UpdateCompanyController {
    gate: Arc<VerifyPrivateKey>,
    use_case: Arc<UpdateCompany>,
}

impl UpdateCompanyController {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_case: Arc<UpdateCompany>) -> Self {
        Self { gate, use_case }
    }

    pub async fn handle(
        &self,
        request: HttpRequest<UpdateCompanyBody, IdParam>,
    ) -> ControllerResult<UpdatedCompanyData, UpdateCompanyError> {
        timed("UpdateCompanyController", self.perform(request)).await
    }

    async fn perform(
        &self,
        request: HttpRequest<UpdateCompanyBody, IdParam>,
    ) -> ControllerResult<UpdatedCompanyData, UpdateCompanyError> {
        authorize(&self.gate, &request.headers)?;

        let changes = request.body.company_update;
        let update = CompanyUpdate {
            corporate_name: changes.corporate_name,
            address: address_update_from_wire(changes.address),
        };
        let company = self
            .use_case
            .execute(&CompanyId::new(request.params.id), update)
            .await
            .map_err(ControllerError::UseCase)?;

        Ok(ResponseSuccess::done(UpdatedCompanyData {
            updated_company: company_data(company),
        }))
    }
}

pub struct DeleteCompanyController {
    gate: Arc<VerifyPrivateKey>,
    use_case: Arc<DeleteCompany>,
}

impl DeleteCompanyController {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_case: Arc<DeleteCompany>) -> Self {
        Self { gate, use_case }
    }

    pub async fn handle(
        &self,
        request: HttpRequest<(), IdParam>,
    ) -> ControllerResult<DeletedCompanyData, DeleteCompanyError> {
        timed("DeleteCompanyController", self.perform(request)).await
    }

    async fn perform(
        &self,
        request: HttpRequest<(), IdParam>,
    ) -> ControllerResult<DeletedCompanyData, DeleteCompanyError> {
        authorize(&self.gate, &request.headers)?;

        let deleted = self
            .use_case
            .execute(&CompanyId::new(request.params.id))
            .await
            .map_err(ControllerError::UseCase)?;

        Ok(ResponseSuccess::done(DeletedCompanyData {
            deleted_company: deleted_data(&deleted),
        }))
    }
}

fn company_data(company: Company) -> CompanyData {
    CompanyData {
        id: company.id.into_inner(),
        corporate_name: company.corporate_name,
        cnpj: company.cnpj.into(),
        address: address_to_wire(company.address),
    }
}

fn address_from_wire(address: AddressData) -> CompanyAddress {
    CompanyAddress {
        zip_code: address.zip_code,
        city: address.city,
        state: address.state,
        street: address.street,
        neighborhood: address.neighborhood,
        complement: address.complement,
    }
}

fn address_to_wire(address: CompanyAddress) -> AddressData {
    AddressData {
        zip_code: address.zip_code,
        city: address.city,
        state: address.state,
        street: address.street,
        neighborhood: address.neighborhood,
        complement: address.complement,
    }
}

fn address_update_from_wire(address: AddressUpdateData) -> CompanyAddressUpdate {
    CompanyAddressUpdate {
        zip_code: address.zip_code,
        city: address.city,
        state: address.state,
        street: address.street,
        neighborhood: address.neighborhood,
        complement: address.complement,
    }
}

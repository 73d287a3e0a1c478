//! License controllers.
//!
//! Dates arrive as strings and are parsed here; a string that is not a date
//! is rejected before the use case runs.

use std::sync::Arc;

use envlicense_domain::common::to_iso_string;
use envlicense_domain::{CompanyId, License, LicenseId, RepositoryError};
use envlicense_shared::{
    CreateLicenseBody, DeletedLicenseData, LicenseCreatedData, LicenseData, LicenseIdData,
    LicenseListData, ResponseSuccess, SingleLicenseData, UpdateLicenseBody, UpdatedLicenseData,
};

use super::{
    authorize, deleted_data, parse_date, parse_optional_date, timed, ControllerError,
    ControllerResult, HttpRequest, IdParam,
};
use crate::use_cases::licenses::{
    CreateLicense, CreateLicenseError, CreateLicenseInput, DeleteLicense, DeleteLicenseError,
    GetLicense, GetLicenseError, LicenseUpdate, LicenseUseCases, ListLicenses, UpdateLicense,
    UpdateLicenseError,
};
use crate::use_cases::VerifyPrivateKey;

/// One controller per license route.
pub struct LicenseControllers {
    pub list: ListLicensesController,
    pub get: GetLicenseController,
    pub create: CreateLicenseController,
    pub update: UpdateLicenseController,
    pub delete: DeleteLicenseController,
}

impl LicenseControllers {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_cases: &LicenseUseCases) -> Self {
        Self {
            list: ListLicensesController::new(gate.clone(), use_cases.list.clone()),
            get: GetLicenseController::new(gate.clone(), use_cases.get.clone()),
            create: CreateLicenseController::new(gate.clone(), use_cases.create.clone()),
            update: UpdateLicenseController::new(gate.clone(), use_cases.update.clone()),
            delete: DeleteLicenseController::new(gate, use_cases.delete.clone()),
        }
    }
}

pub struct ListLicensesController {
    gate: Arc<VerifyPrivateKey>,
    use_case: Arc<ListLicenses>,
}

impl ListLicensesController {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_case: Arc<ListLicenses>) -> Self {
        Self { gate, use_case }
    }

    pub async fn handle(
        &self,
        request: HttpRequest,
    ) -> ControllerResult<LicenseListData, RepositoryError> {
        timed("ListLicensesController", self.perform(request)).await
    }

    async fn perform(
        &self,
        request: HttpRequest,
    ) -> ControllerResult<LicenseListData, RepositoryError> {
        authorize(&self.gate, &request.headers)?;

        let licenses = self
            .use_case
            .execute()
            .await
            .map_err(ControllerError::UseCase)?;

        Ok(ResponseSuccess::done(LicenseListData {
            licenses: licenses.into_iter().map(license_data).collect(),
        }))
    }
}

pub struct GetLicenseController {
    gate: Arc<VerifyPrivateKey>,
    use_case: Arc<GetLicense>,
}

impl GetLicenseController {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_case: Arc<GetLicense>) -> Self {
        Self { gate, use_case }
    }

    pub async fn handle(
        &self,
        request: HttpRequest<(), IdParam>,
    ) -> ControllerResult<SingleLicenseData, GetLicenseError> {
        timed("GetLicenseController", self.perform(request)).await
    }

    async fn perform(
        &self,
        request: HttpRequest<(), IdParam>,
    ) -> ControllerResult<SingleLicenseData, GetLicenseError> {
        authorize(&self.gate, &request.headers)?;

        let license = self
            .use_case
            .execute(&LicenseId::new(request.params.id))
            .await
            .map_err(ControllerError::UseCase)?;

        Ok(ResponseSuccess::done(SingleLicenseData {
            license: license_data(license),
        }))
    }
}

pub struct CreateLicenseController {
    gate: Arc<VerifyPrivateKey>,
    use_case: Arc<CreateLicense>,
}

impl CreateLicenseController {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_case: Arc<CreateLicense>) -> Self {
        Self { gate, use_case }
    }

    pub async fn handle(
        &self,
        request: HttpRequest<CreateLicenseBody>,
    ) -> ControllerResult<LicenseCreatedData, CreateLicenseError> {
        timed("CreateLicenseController", self.perform(request)).await
    }

    async fn perform(
        &self,
        request: HttpRequest<CreateLicenseBody>,
    ) -> ControllerResult<LicenseCreatedData, CreateLicenseError> {
        authorize(&self.gate, &request.headers)?;

        let CreateLicenseBody {
            license_info: info,
            company,
        } = request.body;
        let input = CreateLicenseInput {
            company_id: CompanyId::new(company.id),
            emission_date: parse_date("emission_date", &info.emission_date)?,
            expiration_date: parse_date("expiration_date", &info.expiration_date)?,
            license_number: info.license_number,
            environmental_agency: info.environmental_agency,
        };
        let id = self
            .use_case
            .execute(input)
            .await
            .map_err(ControllerError::UseCase)?;

        Ok(ResponseSuccess::created(LicenseCreatedData {
            license_created: LicenseIdData {
                id: id.into_inner(),
            },
        }))
    }
}

pub struct UpdateLicenseController {
    gate: Arc<VerifyPrivateKey>,
    use_case: Arc<UpdateLicense>,
}

impl UpdateLicenseController {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_case: Arc<UpdateLicense>) -> Self {
        Self { gate, use_case }
    }

    pub async fn handle(
        &self,
        request: HttpRequest<UpdateLicenseBody, IdParam>,
    ) -> ControllerResult<UpdatedLicenseData, UpdateLicenseError> {
        timed("UpdateLicenseController", self.perform(request)).await
    }

    async fn perform(
        &self,
        request: HttpRequest<UpdateLicenseBody, IdParam>,
    ) -> ControllerResult<UpdatedLicenseData, UpdateLicenseError> {
        authorize(&self.gate, &request.headers)?;

        let changes = request.body.license_update;
        let update = LicenseUpdate {
            emission_date: parse_optional_date("emission_date", changes.emission_date.as_deref())?,
            expiration_date: parse_optional_date(
                "expiration_date",
                changes.expiration_date.as_deref(),
            )?,
            license_number: changes.license_number,
            environmental_agency: changes.environmental_agency,
        };
        let license = self
            .use_case
            .execute(&LicenseId::new(request.params.id), update)
            .await
            .map_err(ControllerError::UseCase)?;

        Ok(ResponseSuccess::done(UpdatedLicenseData {
            updated_license: license_data(license),
        }))
    }
}

pub struct DeleteLicenseController {
    gate: Arc<VerifyPrivateKey>,
    use_case: Arc<DeleteLicense>,
}

impl DeleteLicenseController {
    pub fn new(gate: Arc<VerifyPrivateKey>, use_case: Arc<DeleteLicense>) -> Self {
        Self { gate, use_case }
    }

    pub async fn handle(
        &self,
        request: HttpRequest<(), IdParam>,
    ) -> ControllerResult<DeletedLicenseData, DeleteLicenseError> {
        timed("DeleteLicenseController", self.perform(request)).await
    }

    async fn perform(
        &self,
        request: HttpRequest<(), IdParam>,
    ) -> ControllerResult<DeletedLicenseData, DeleteLicenseError> {
        authorize(&self.gate, &request.headers)?;

        let deleted = self
            .use_case
            .execute(&LicenseId::new(request.params.id))
            .await
            .map_err(ControllerError::UseCase)?;

        Ok(ResponseSuccess::done(DeletedLicenseData {
            deleted_license: deleted_data(&deleted),
        }))
    }
}

fn license_data(license: License) -> LicenseData {
    LicenseData {
        id: license.id.into_inner(),
        license_number: license.license_number,
        environmental_agency: license.environmental_agency,
        emission_date: to_iso_string(&license.emission_date),
        expiration_date: to_iso_string(&license.expiration_date),
    }
}

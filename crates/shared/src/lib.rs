//! Environmental licenses wire format.
//!
//! Request bodies and response envelopes exactly as they travel over HTTP:
//! snake_case keys, dates as ISO-8601 strings. No business logic lives here;
//! the engine's controllers translate between these shapes and the domain.

pub mod requests;
pub mod responses;

pub use requests::{
    AddressData, AddressUpdateData, CompanyInfoData, CompanyRefData, CompanyUpdateData,
    CreateCompanyBody, CreateLicenseBody, LicenseInfoData, LicenseUpdateData, UpdateCompanyBody,
    UpdateLicenseBody,
};
pub use responses::{
    CompanyCreatedData, CompanyData, CompanyListData, DeletedCompanyData, DeletedData,
    DeletedLicenseData, ErrorBody, ErrorDetail, LicenseCreatedData, LicenseData, LicenseIdData,
    LicenseListData, NotFoundRouteBody, ResponseSuccess, SingleCompanyData, SingleLicenseData,
    StatusSuccess, UpdatedCompanyData, UpdatedLicenseData,
};

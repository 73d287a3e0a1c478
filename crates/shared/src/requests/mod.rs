//! Request bodies accepted by the insert and update routes.

mod company;
mod license;

pub use company::{
    AddressData, AddressUpdateData, CompanyInfoData, CompanyUpdateData, CreateCompanyBody,
    UpdateCompanyBody,
};
pub use license::{
    CompanyRefData, CreateLicenseBody, LicenseInfoData, LicenseUpdateData, UpdateLicenseBody,
};

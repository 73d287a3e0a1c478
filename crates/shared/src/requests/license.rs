use serde::{Deserialize, Serialize};

/// `POST /licenca/insert`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLicenseBody {
    pub license_info: LicenseInfoData,
    pub company: CompanyRefData,
}

/// Dates are ISO-8601 strings; the engine parses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseInfoData {
    pub license_number: String,
    pub environmental_agency: String,
    pub emission_date: String,
    pub expiration_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRefData {
    pub id: String,
}

/// `PUT /licenca/update/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLicenseBody {
    pub license_update: LicenseUpdateData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LicenseUpdateData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environmental_agency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emission_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

use serde::{Deserialize, Serialize};

/// `POST /empresa/insert`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompanyBody {
    pub company_info: CompanyInfoData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfoData {
    pub corporate_name: String,
    pub cnpj: String,
    pub address: AddressData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressData {
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub street: String,
    pub neighborhood: String,
    #[serde(default)]
    pub complement: String,
}

/// `PUT /empresa/update/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCompanyBody {
    pub company_update: CompanyUpdateData,
}

/// Absent fields keep the company's current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyUpdateData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corporate_name: Option<String>,
    #[serde(default)]
    pub address: AddressUpdateData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressUpdateData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
}

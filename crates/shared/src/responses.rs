//! Response envelopes and payloads.
//!
//! Every successful response is a [`ResponseSuccess`] wrapping one of the
//! payloads below under `data`. Failures are an [`ErrorBody`].

use serde::{Deserialize, Serialize};

use crate::requests::AddressData;

// =============================================================================
// Envelopes
// =============================================================================

/// Classifies a successful operation. Creation answers 201, everything else 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusSuccess {
    Created,
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSuccess<T> {
    pub data: T,
    pub status: StatusSuccess,
}

impl<T> ResponseSuccess<T> {
    pub fn created(data: T) -> Self {
        Self {
            data,
            status: StatusSuccess::Created,
        }
    }

    pub fn done(data: T) -> Self {
        Self {
            data,
            status: StatusSuccess::Done,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// `status` is the error's tag (`not_found`, `invalid`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub status: String,
    pub message: String,
}

/// Body of the fallback answer for unknown routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotFoundRouteBody {
    pub code: String,
    pub message: String,
    pub status: u16,
}

// =============================================================================
// Company payloads
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyData {
    pub id: String,
    pub corporate_name: String,
    pub cnpj: String,
    pub address: AddressData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyCreatedData {
    pub company_created: CompanyData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleCompanyData {
    pub company: CompanyData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyListData {
    pub companies: Vec<CompanyData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedCompanyData {
    pub updated_company: CompanyData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedCompanyData {
    pub deleted_company: DeletedData,
}

/// Id and ISO-8601 deletion time of a soft-deleted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedData {
    pub id: String,
    pub deleted_at: String,
}

// =============================================================================
// License payloads
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseData {
    pub id: String,
    pub license_number: String,
    pub environmental_agency: String,
    pub emission_date: String,
    pub expiration_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseIdData {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseCreatedData {
    pub license_created: LicenseIdData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleLicenseData {
    pub license: LicenseData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseListData {
    pub licenses: Vec<LicenseData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedLicenseData {
    pub updated_license: LicenseData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedLicenseData {
    pub deleted_license: DeletedData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_status_is_screaming_case() {
        let created = ResponseSuccess::created(LicenseCreatedData {
            license_created: LicenseIdData { id: "l-1".into() },
        });
        assert_eq!(
            serde_json::to_value(&created).unwrap(),
            json!({"data": {"license_created": {"id": "l-1"}}, "status": "CREATED"})
        );

        let done = ResponseSuccess::done(LicenseListData { licenses: vec![] });
        assert_eq!(
            serde_json::to_value(&done).unwrap(),
            json!({"data": {"licenses": []}, "status": "DONE"})
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: ErrorDetail {
                status: "not_found".into(),
                message: "Company with id x not found.".into(),
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"error": {"status": "not_found", "message": "Company with id x not found."}})
        );
    }
}

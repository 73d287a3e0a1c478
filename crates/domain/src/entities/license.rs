//! License entity - an environmental license issued to a company

use chrono::{DateTime, Utc};

use crate::ids::{CompanyId, LicenseId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    pub id: LicenseId,
    /// Unique among licenses that are not deleted.
    pub license_number: String,
    pub environmental_agency: String,
    pub emission_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    pub company_id: CompanyId,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl License {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

//! Domain entities - business records with identity

mod company;
mod license;

pub use company::{Company, CompanyAddress};
pub use license::License;

use chrono::{DateTime, Utc};

/// Outcome of a soft delete: the record's id and when it was marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftDeleted<Id> {
    pub id: Id,
    pub deleted_at: DateTime<Utc>,
}

//! SQLite implementation of the license repository.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;
use std::sync::Arc;

use envlicense_domain::{
    CompanyId, License, LicenseId, RepositoryError, RepositoryMethod, RepositoryName, SoftDeleted,
    StoreError,
};

use super::{column, format_timestamp, parse_timestamp, sqlx_error};
use crate::infrastructure::ports::{ClockPort, IdGenerator, LicenseRepo, NewLicense};

const REPOSITORY: RepositoryName = RepositoryName::Licenses;

const LICENSE_COLUMNS: &str = "id, license_number, environmental_agency, emission_date, \
                               expiration_date, company_id, deleted_at";

pub struct SqliteLicenseRepo {
    pool: SqlitePool,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn ClockPort>,
}

impl SqliteLicenseRepo {
    /// Expects the `companies` table to exist already.
    pub async fn new(
        pool: SqlitePool,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS licenses (
                id TEXT PRIMARY KEY NOT NULL,
                license_number TEXT NOT NULL,
                environmental_agency TEXT NOT NULL,
                emission_date TEXT NOT NULL,
                expiration_date TEXT NOT NULL,
                company_id TEXT NOT NULL REFERENCES companies(id),
                deleted_at TEXT
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, RepositoryMethod::Connect, e))?;

        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS licenses_live_number \
             ON licenses(license_number) WHERE deleted_at IS NULL",
        )
        .execute(&pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, RepositoryMethod::Connect, e))?;

        Ok(Self { pool, ids, clock })
    }

    fn row_to_license(row: &SqliteRow, method: RepositoryMethod) -> Result<License, RepositoryError> {
        let get = |name: &str| column::<String>(REPOSITORY, method, row, name);
        let timestamp = |name: &str| {
            get(name).and_then(|value| parse_timestamp(REPOSITORY, method, &value))
        };

        Ok(License {
            id: LicenseId::new(get("id")?),
            license_number: get("license_number")?,
            environmental_agency: get("environmental_agency")?,
            emission_date: timestamp("emission_date")?,
            expiration_date: timestamp("expiration_date")?,
            company_id: CompanyId::new(get("company_id")?),
            deleted_at: column::<Option<String>>(REPOSITORY, method, row, "deleted_at")?
                .map(|value| parse_timestamp(REPOSITORY, method, &value))
                .transpose()?,
        })
    }
}

#[async_trait]
impl LicenseRepo for SqliteLicenseRepo {
    async fn find_all(&self) -> Result<Vec<License>, RepositoryError> {
        let method = RepositoryMethod::FindAll;
        let rows = sqlx::query(&format!(
            "SELECT {LICENSE_COLUMNS} FROM licenses WHERE deleted_at IS NULL ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, method, e))?;

        rows.iter()
            .map(|row| Self::row_to_license(row, method))
            .collect()
    }

    async fn find_by_id(&self, id: &LicenseId) -> Result<Option<License>, RepositoryError> {
        let method = RepositoryMethod::FindById;
        let row = sqlx::query(&format!(
            "SELECT {LICENSE_COLUMNS} FROM licenses WHERE id = ?"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, method, e))?;

        row.map(|row| Self::row_to_license(&row, method)).transpose()
    }

    async fn find_by_license_number(
        &self,
        license_number: &str,
    ) -> Result<Option<License>, RepositoryError> {
        let method = RepositoryMethod::FindByLicenseNumber;
        let row = sqlx::query(&format!(
            "SELECT {LICENSE_COLUMNS} FROM licenses \
             WHERE license_number = ? AND deleted_at IS NULL"
        ))
        .bind(license_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, method, e))?;

        row.map(|row| Self::row_to_license(&row, method)).transpose()
    }

    async fn save(&self, license: &NewLicense) -> Result<LicenseId, StoreError> {
        let id = self.ids.generate_id()?;

        sqlx::query(
            r#"
            INSERT INTO licenses (id, license_number, environmental_agency, emission_date,
                                  expiration_date, company_id, deleted_at)
            VALUES (?, ?, ?, ?, ?, ?, NULL)
            "#,
        )
        .bind(&id)
        .bind(&license.license_number)
        .bind(&license.environmental_agency)
        .bind(format_timestamp(&license.emission_date))
        .bind(format_timestamp(&license.expiration_date))
        .bind(license.company_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, RepositoryMethod::Save, e))?;

        tracing::debug!(license_id = %id, company_id = %license.company_id, "Saved license");
        Ok(LicenseId::new(id))
    }

    async fn update(&self, license: &License) -> Result<License, RepositoryError> {
        let method = RepositoryMethod::Update;
        let row = sqlx::query(&format!(
            r#"
            UPDATE licenses SET
                license_number = ?, environmental_agency = ?,
                emission_date = ?, expiration_date = ?
            WHERE id = ?
            RETURNING {LICENSE_COLUMNS}
            "#
        ))
        .bind(&license.license_number)
        .bind(&license.environmental_agency)
        .bind(format_timestamp(&license.emission_date))
        .bind(format_timestamp(&license.expiration_date))
        .bind(license.id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, method, e))?;

        match row {
            Some(row) => Self::row_to_license(&row, method),
            None => Err(sqlx_error(
                REPOSITORY,
                method,
                format!("no license with id {}", license.id),
            )),
        }
    }

    async fn soft_delete(
        &self,
        id: &LicenseId,
    ) -> Result<SoftDeleted<LicenseId>, RepositoryError> {
        let deleted_at = self.clock.now();

        sqlx::query("UPDATE licenses SET deleted_at = ? WHERE id = ?")
            .bind(format_timestamp(&deleted_at))
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| sqlx_error(REPOSITORY, RepositoryMethod::SoftDelete, e))?;

        Ok(SoftDeleted {
            id: id.clone(),
            deleted_at,
        })
    }
}

//! SQLite implementation of the company repository.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;
use std::sync::Arc;

use envlicense_domain::{
    Cnpj, Company, CompanyAddress, CompanyId, RepositoryError, RepositoryMethod, RepositoryName,
    SoftDeleted, StoreError,
};

use super::{column, format_timestamp, parse_timestamp, sqlx_error};
use crate::infrastructure::ports::{ClockPort, CompanyRepo, IdGenerator, NewCompany};

const REPOSITORY: RepositoryName = RepositoryName::Companies;

const COMPANY_COLUMNS: &str = "id, corporate_name, cnpj, zip_code, city, state, street, \
                               neighborhood, complement, deleted_at";

pub struct SqliteCompanyRepo {
    pool: SqlitePool,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn ClockPort>,
}

impl SqliteCompanyRepo {
    pub async fn new(
        pool: SqlitePool,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS companies (
                id TEXT PRIMARY KEY NOT NULL,
                corporate_name TEXT NOT NULL,
                cnpj TEXT NOT NULL,
                zip_code TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                street TEXT NOT NULL,
                neighborhood TEXT NOT NULL,
                complement TEXT NOT NULL,
                deleted_at TEXT
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, RepositoryMethod::Connect, e))?;

        // A CNPJ is unique among live companies only.
        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS companies_live_cnpj \
             ON companies(cnpj) WHERE deleted_at IS NULL",
        )
        .execute(&pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, RepositoryMethod::Connect, e))?;

        Ok(Self { pool, ids, clock })
    }

    fn row_to_company(row: &SqliteRow, method: RepositoryMethod) -> Result<Company, RepositoryError> {
        let get = |name: &str| column::<String>(REPOSITORY, method, row, name);
        let deleted_at = column::<Option<String>>(REPOSITORY, method, row, "deleted_at")?
            .map(|value| parse_timestamp(REPOSITORY, method, &value))
            .transpose()?;

        Ok(Company {
            id: CompanyId::new(get("id")?),
            corporate_name: get("corporate_name")?,
            cnpj: Cnpj::from_persisted(get("cnpj")?),
            address: CompanyAddress {
                zip_code: get("zip_code")?,
                city: get("city")?,
                state: get("state")?,
                street: get("street")?,
                neighborhood: get("neighborhood")?,
                complement: get("complement")?,
            },
            deleted_at,
        })
    }
}

#[async_trait]
impl CompanyRepo for SqliteCompanyRepo {
    async fn find_all(&self) -> Result<Vec<Company>, RepositoryError> {
        let method = RepositoryMethod::FindAll;
        let rows = sqlx::query(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE deleted_at IS NULL ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, method, e))?;

        rows.iter()
            .map(|row| Self::row_to_company(row, method))
            .collect()
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError> {
        let method = RepositoryMethod::FindById;
        let row = sqlx::query(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE id = ?"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, method, e))?;

        row.map(|row| Self::row_to_company(&row, method)).transpose()
    }

    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Company>, RepositoryError> {
        let method = RepositoryMethod::FindByCnpj;
        let row = sqlx::query(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE cnpj = ? AND deleted_at IS NULL"
        ))
        .bind(cnpj.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, method, e))?;

        row.map(|row| Self::row_to_company(&row, method)).transpose()
    }

    async fn save(&self, company: &NewCompany) -> Result<CompanyId, StoreError> {
        let id = self.ids.generate_id()?;

        sqlx::query(
            r#"
            INSERT INTO companies (id, corporate_name, cnpj, zip_code, city, state, street,
                                   neighborhood, complement, deleted_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, NULL)
            "#,
        )
        .bind(&id)
        .bind(&company.corporate_name)
        .bind(company.cnpj.as_str())
        .bind(&company.address.zip_code)
        .bind(&company.address.city)
        .bind(&company.address.state)
        .bind(&company.address.street)
        .bind(&company.address.neighborhood)
        .bind(&company.address.complement)
        .execute(&self.pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, RepositoryMethod::Save, e))?;

        tracing::debug!(company_id = %id, "Saved company");
        Ok(CompanyId::new(id))
    }

    async fn update(&self, company: &Company) -> Result<Company, RepositoryError> {
        let method = RepositoryMethod::Update;
        let row = sqlx::query(&format!(
            r#"
            UPDATE companies SET
                corporate_name = ?, cnpj = ?, zip_code = ?, city = ?, state = ?,
                street = ?, neighborhood = ?, complement = ?
            WHERE id = ?
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(&company.corporate_name)
        .bind(company.cnpj.as_str())
        .bind(&company.address.zip_code)
        .bind(&company.address.city)
        .bind(&company.address.state)
        .bind(&company.address.street)
        .bind(&company.address.neighborhood)
        .bind(&company.address.complement)
        .bind(company.id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| sqlx_error(REPOSITORY, method, e))?;

        match row {
            Some(row) => Self::row_to_company(&row, method),
            None => Err(sqlx_error(
                REPOSITORY,
                method,
                format!("no company with id {}", company.id),
            )),
        }
    }

    async fn soft_delete(
        &self,
        id: &CompanyId,
    ) -> Result<SoftDeleted<CompanyId>, RepositoryError> {
        let deleted_at = self.clock.now();

        sqlx::query("UPDATE companies SET deleted_at = ? WHERE id = ?")
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::persistence::connect_in_memory;
    use crate::infrastructure::ports::MockIdGenerator;
    use chrono::{TimeZone, Utc};
    use envlicense_domain::{ProviderError, ProviderMethod, ProviderName};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn generate_id(&self) -> Result<String, ProviderError> {
            Ok(format!("company-{}", self.0.fetch_add(1, Ordering::SeqCst)))
        }
    }

    async fn repo() -> SqliteCompanyRepo {
        let pool = connect_in_memory().await.unwrap();
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        SqliteCompanyRepo::new(pool, Arc::new(SequentialIds(AtomicUsize::new(1))), Arc::new(clock))
            .await
            .unwrap()
    }

    fn new_company(cnpj: &str) -> NewCompany {
        NewCompany {
            corporate_name: "Acme".to_string(),
            cnpj: Cnpj::validate(cnpj).unwrap(),
            address: CompanyAddress {
                zip_code: "01001000".to_string(),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                street: "Praça da Sé".to_string(),
                neighborhood: "Sé".to_string(),
                complement: String::new(),
            },
        }
    }

    #[tokio::test]
    async fn test_save_then_find_by_id() {
        let repo = repo().await;

        let id = repo.save(&new_company("11222333000181")).await.unwrap();
        let company = repo.find_by_id(&id).await.unwrap().unwrap();

        assert_eq!(id.as_str(), "company-1");
        assert_eq!(company.corporate_name, "Acme");
        assert_eq!(company.cnpj.as_str(), "11222333000181");
        assert_eq!(company.address.zip_code, "01001000");
        assert!(company.deleted_at.is_none());
    }

    #[tokio::test]
    async fn test_save_fails_when_id_generation_fails() {
        let pool = connect_in_memory().await.unwrap();
        let mut ids = MockIdGenerator::new();
        ids.expect_generate_id().returning(|| {
            Err(ProviderError::new(ProviderName::Crypto, ProviderMethod::GenerateId))
        });
        let clock = FixedClock(Utc::now());
        let repo = SqliteCompanyRepo::new(pool, Arc::new(ids), Arc::new(clock))
            .await
            .unwrap();

        let err = repo.save(&new_company("11222333000181")).await.unwrap_err();

        assert!(matches!(err, StoreError::Provider(_)));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_soft_deleted_company_is_hidden_from_filtered_reads() {
        let repo = repo().await;
        let id = repo.save(&new_company("11222333000181")).await.unwrap();
        let cnpj = Cnpj::validate("11222333000181").unwrap();

        let deleted = repo.soft_delete(&id).await.unwrap();

        assert_eq!(deleted.id, id);
        assert_eq!(
            deleted.deleted_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        );
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(repo.find_by_cnpj(&cnpj).await.unwrap().is_none());

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.deleted_at, Some(deleted.deleted_at));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = repo().await;
        let id = repo.save(&new_company("11222333000181")).await.unwrap();
        let mut company = repo.find_by_id(&id).await.unwrap().unwrap();
        company.corporate_name = "Acme Ambiental".to_string();
        company.address.complement = "sala 4".to_string();

        let updated = repo.update(&company).await.unwrap();

        assert_eq!(updated, company);
        assert_eq!(repo.find_by_id(&id).await.unwrap().unwrap(), company);
    }

    #[tokio::test]
    async fn test_update_of_missing_row_is_repository_error() {
        let repo = repo().await;
        let ghost = Company {
            id: CompanyId::new("ghost"),
            corporate_name: "Ghost".to_string(),
            cnpj: Cnpj::validate("11222333000181").unwrap(),
            address: new_company("11222333000181").address,
            deleted_at: None,
        };

        let err = repo.update(&ghost).await.unwrap_err();

        assert_eq!(err.method, RepositoryMethod::Update);
        assert_eq!(err.repository, RepositoryName::Companies);
    }

    #[tokio::test]
    async fn test_second_live_company_with_same_cnpj_is_rejected() {
        let repo = repo().await;
        repo.save(&new_company("11222333000181")).await.unwrap();

        let err = repo.save(&new_company("11222333000181")).await.unwrap_err();

        match err {
            StoreError::Repository(e) => {
                assert_eq!(e.method, RepositoryMethod::Save);
                assert_eq!(e.external_name, Some("sqlx"));
            }
            other => panic!("expected repository error, got {other:?}"),
        }
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_cnpj_of_deleted_company_can_be_saved_again() {
        let repo = repo().await;
        let first = repo.save(&new_company("11222333000181")).await.unwrap();
        repo.soft_delete(&first).await.unwrap();

        let second = repo.save(&new_company("11222333000181")).await.unwrap();

        assert_ne!(first, second);
        let cnpj = Cnpj::validate("11222333000181").unwrap();
        assert_eq!(repo.find_by_cnpj(&cnpj).await.unwrap().unwrap().id, second);
    }

    #[tokio::test]
    async fn test_undecodable_column_is_repository_error() {
        let repo = repo().await;
        sqlx::query(
            "INSERT INTO companies (id, corporate_name, cnpj, zip_code, city, state, street, \
             neighborhood, complement, deleted_at) \
             VALUES ('broken', X'FF00', '11222333000181', '01001000', 'SP', 'SP', 'Main', \
             'Centro', '', NULL)",
        )
        .execute(&repo.pool)
        .await
        .unwrap();

        let err = repo.find_all().await.unwrap_err();

        assert_eq!(err.method, RepositoryMethod::FindAll);
        assert_eq!(err.repository, RepositoryName::Companies);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = repo().await;
        repo.save(&new_company("11222333000181")).await.unwrap();
        let mut second = new_company("11444777000161");
        second.corporate_name = "Beta".to_string();
        repo.save(&second).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.corporate_name)
            .collect();

        assert_eq!(names, vec!["Acme".to_string(), "Beta".to_string()]);
    }
}

//! SQLite persistence adapters
//!
//! Implements the repository ports for companies and licenses on a shared
//! `SqlitePool`. Each repository creates its own table on construction.

mod company_repository;
mod license_repository;

pub use company_repository::SqliteCompanyRepo;
pub use license_repository::SqliteLicenseRepo;

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, Sqlite, SqlitePool};

use envlicense_domain::{RepositoryError, RepositoryMethod, RepositoryName};

/// Open a pool for `database_url`, creating the database file if needed.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    tracing::info!("Connected to SQLite at {}", database_url);

    Ok(pool)
}

/// A private in-memory database. Pinned to one connection that never
/// expires, since every SQLite memory connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

pub(crate) fn sqlx_error(
    repository: RepositoryName,
    method: RepositoryMethod,
    error: impl ToString,
) -> RepositoryError {
    let error = RepositoryError::new(repository, method).caused_by("sqlx", error);
    tracing::error!(error = %error, detail = ?error.detail, "Repository call failed");
    error
}

/// Read one column, turning a decode failure into a `RepositoryError`.
pub(crate) fn column<'r, T>(
    repository: RepositoryName,
    method: RepositoryMethod,
    row: &'r SqliteRow,
    name: &str,
) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get(name)
        .map_err(|e| sqlx_error(repository, method, e))
}

pub(crate) fn format_timestamp(value: &DateTime<Utc>) -> String {
    envlicense_domain::common::to_iso_string(value)
}

pub(crate) fn parse_timestamp(
    repository: RepositoryName,
    method: RepositoryMethod,
    value: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| sqlx_error(repository, method, format!("bad timestamp {value:?}: {e}")))
}

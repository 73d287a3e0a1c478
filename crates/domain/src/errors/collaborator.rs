//! Failures raised by collaborators: repositories and third-party providers.
//!
//! Both records name where the failure happened and keep the original
//! error text in `detail` for logging. `detail` is never part of the
//! public message.

use std::fmt;

use super::status::{ErrorStatus, StatusError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryName {
    Companies,
    Licenses,
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Companies => "companies",
            Self::Licenses => "licenses",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryMethod {
    FindAll,
    FindById,
    FindByCnpj,
    FindByLicenseNumber,
    Save,
    SoftDelete,
    Update,
    Connect,
}

impl fmt::Display for RepositoryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FindAll => "find all",
            Self::FindById => "find by id",
            Self::FindByCnpj => "find by cnpj",
            Self::FindByLicenseNumber => "find by license number",
            Self::Save => "save",
            Self::SoftDelete => "soft delete",
            Self::Update => "update",
            Self::Connect => "connect",
        })
    }
}

/// A repository call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error in {repository} repository in {method} method.{}", external_suffix(.external_name))]
pub struct RepositoryError {
    pub repository: RepositoryName,
    pub method: RepositoryMethod,
    pub external_name: Option<&'static str>,
    pub detail: Option<String>,
}

impl RepositoryError {
    pub fn new(repository: RepositoryName, method: RepositoryMethod) -> Self {
        Self {
            repository,
            method,
            external_name: None,
            detail: None,
        }
    }

    /// Attach the external library that failed and its error text.
    pub fn caused_by(mut self, external_name: &'static str, detail: impl ToString) -> Self {
        self.external_name = Some(external_name);
        self.detail = Some(detail.to_string());
        self
    }
}

impl ErrorStatus for RepositoryError {
    fn status(&self) -> StatusError {
        StatusError::RepositoryError
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderName {
    Address,
    Crypto,
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Address => "address",
            Self::Crypto => "crypto",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderMethod {
    GetZipCodeData,
    GenerateId,
}

impl fmt::Display for ProviderMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GetZipCodeData => "get zip code data",
            Self::GenerateId => "generate id",
        })
    }
}

/// A third-party provider call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error in {provider} provider in {method} method.{}", external_suffix(.external_name))]
pub struct ProviderError {
    pub provider: ProviderName,
    pub method: ProviderMethod,
    pub external_name: Option<&'static str>,
    pub detail: Option<String>,
}

impl ProviderError {
    pub fn new(provider: ProviderName, method: ProviderMethod) -> Self {
        Self {
            provider,
            method,
            external_name: None,
            detail: None,
        }
    }

    /// Attach the external library that failed and its error text.
    pub fn caused_by(mut self, external_name: &'static str, detail: impl ToString) -> Self {
        self.external_name = Some(external_name);
        self.detail = Some(detail.to_string());
        self
    }
}

impl ErrorStatus for ProviderError {
    fn status(&self) -> StatusError {
        StatusError::ProviderError
    }
}

/// Failure of a repository `save`: the store itself, or the id provider it
/// depends on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ErrorStatus for StoreError {
    fn status(&self) -> StatusError {
        match self {
            Self::Repository(e) => e.status(),
            Self::Provider(e) => e.status(),
        }
    }
}

fn external_suffix(external_name: &Option<&'static str>) -> String {
    match external_name {
        Some(name) => format!(" Error in external lib name: {}.", name),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_message_names_repository_and_method() {
        let err = RepositoryError::new(RepositoryName::Companies, RepositoryMethod::FindByCnpj);
        assert_eq!(
            err.to_string(),
            "Error in companies repository in find by cnpj method."
        );
        assert_eq!(err.status(), StatusError::RepositoryError);
    }

    #[test]
    fn external_name_is_appended_but_detail_is_not() {
        let err = RepositoryError::new(RepositoryName::Licenses, RepositoryMethod::Save)
            .caused_by("sqlx", "database is locked");
        assert_eq!(
            err.to_string(),
            "Error in licenses repository in save method. Error in external lib name: sqlx."
        );
        assert_eq!(err.detail.as_deref(), Some("database is locked"));
    }

    #[test]
    fn provider_message_and_status() {
        let err = ProviderError::new(ProviderName::Address, ProviderMethod::GetZipCodeData)
            .caused_by("reqwest", "timeout");
        assert_eq!(
            err.to_string(),
            "Error in address provider in get zip code data method. Error in external lib name: reqwest."
        );
        assert_eq!(err.status(), StatusError::ProviderError);
    }

    #[test]
    fn store_error_keeps_inner_status() {
        let err: StoreError =
            ProviderError::new(ProviderName::Crypto, ProviderMethod::GenerateId).into();
        assert_eq!(err.status(), StatusError::ProviderError);
        assert_eq!(
            err.to_string(),
            "Error in crypto provider in generate id method."
        );
    }
}

//! Get company use case.

use std::sync::Arc;

use envlicense_domain::{Company, CompanyId, CompanyNotFoundError};

use crate::infrastructure::ports::CompanyRepo;

use super::error::GetCompanyError;

pub struct GetCompany {
    companies: Arc<dyn CompanyRepo>,
}

impl GetCompany {
    pub fn new(companies: Arc<dyn CompanyRepo>) -> Self {
        Self { companies }
    }

    /// A soft-deleted company is reported as not found.
    #[tracing::instrument(skip(self), fields(company_id = %id))]
    pub async fn execute(&self, id: &CompanyId) -> Result<Company, GetCompanyError> {
        match self.companies.find_by_id(id).await? {
            Some(company) if !company.is_deleted() => Ok(company),
            _ => Err(CompanyNotFoundError::new(id.clone()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCompanyRepo;
    use crate::test_fixtures;
    use envlicense_domain::{RepositoryError, RepositoryMethod, RepositoryName};

    #[tokio::test]
    async fn when_company_exists_returns_it() {
        let mut companies = MockCompanyRepo::new();
        companies
            .expect_find_by_id()
            .withf(|id| id.as_str() == "company-1")
            .returning(|id| Ok(Some(test_fixtures::company(id.as_str()))));

        let use_case = GetCompany::new(Arc::new(companies));
        let company = use_case.execute(&CompanyId::new("company-1")).await.unwrap();

        assert_eq!(company, test_fixtures::company("company-1"));
    }

    #[tokio::test]
    async fn when_company_is_missing_returns_not_found() {
        let mut companies = MockCompanyRepo::new();
        companies.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetCompany::new(Arc::new(companies));
        let result = use_case.execute(&CompanyId::new("nope")).await;

        assert_eq!(
            result,
            Err(GetCompanyError::NotFound(CompanyNotFoundError::new(
                CompanyId::new("nope")
            )))
        );
    }

    #[tokio::test]
    async fn when_company_is_soft_deleted_returns_not_found() {
        let mut companies = MockCompanyRepo::new();
        companies
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_fixtures::deleted_company(id.as_str()))));

        let use_case = GetCompany::new(Arc::new(companies));
        let result = use_case.execute(&CompanyId::new("company-1")).await;

        assert!(matches!(result, Err(GetCompanyError::NotFound(_))));
    }

    #[tokio::test]
    async fn when_repository_fails_returns_repository_error() {
        let mut companies = MockCompanyRepo::new();
        companies.expect_find_by_id().returning(|_| {
            Err(RepositoryError::new(
                RepositoryName::Companies,
                RepositoryMethod::FindById,
            ))
        });

        let use_case = GetCompany::new(Arc::new(companies));
        let result = use_case.execute(&CompanyId::new("company-1")).await;

        assert!(matches!(result, Err(GetCompanyError::Repository(_))));
    }
}

//! Application state and composition.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::controllers::{CompanyControllers, LicenseControllers};
use crate::infrastructure::{
    clock::{SystemClock, UuidIdGenerator},
    persistence::{self, SqliteCompanyRepo, SqliteLicenseRepo},
    ports::{AddressProvider, ClockPort, CompanyRepo, IdGenerator, LicenseRepo},
    zip_code::ViaCepAddressProvider,
};
use crate::use_cases::{CompanyUseCases, LicenseUseCases, VerifyPrivateKey};

/// Main application state.
///
/// Passed to the HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub controllers: Controllers,
}

/// Port traits injected directly.
pub struct Repositories {
    pub companies: Arc<dyn CompanyRepo>,
    pub licenses: Arc<dyn LicenseRepo>,
}

pub struct UseCases {
    pub verify_private_key: Arc<VerifyPrivateKey>,
    pub companies: CompanyUseCases,
    pub licenses: LicenseUseCases,
}

pub struct Controllers {
    pub companies: CompanyControllers,
    pub licenses: LicenseControllers,
}

impl App {
    /// Wire use cases and controllers over already-built collaborators.
    pub fn new(
        repositories: Repositories,
        address_provider: Arc<dyn AddressProvider>,
        private_key: String,
    ) -> Self {
        let verify_private_key = Arc::new(VerifyPrivateKey::new(private_key));
        let use_cases = UseCases {
            companies: CompanyUseCases::new(repositories.companies.clone(), address_provider),
            licenses: LicenseUseCases::new(
                repositories.companies.clone(),
                repositories.licenses.clone(),
            ),
            verify_private_key,
        };
        let controllers = Controllers {
            companies: CompanyControllers::new(
                use_cases.verify_private_key.clone(),
                &use_cases.companies,
            ),
            licenses: LicenseControllers::new(
                use_cases.verify_private_key.clone(),
                &use_cases.licenses,
            ),
        };

        Self {
            repositories,
            use_cases,
            controllers,
        }
    }

    /// Connect to SQLite and the postal-code service described by `config`.
    pub async fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let pool = persistence::connect(&config.database_url).await?;
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator::new());

        let companies = SqliteCompanyRepo::new(pool.clone(), ids.clone(), clock.clone()).await?;
        let licenses = SqliteLicenseRepo::new(pool, ids, clock).await?;
        let repositories = Repositories {
            companies: Arc::new(companies),
            licenses: Arc::new(licenses),
        };

        tracing::info!(url = %config.zip_code_api_url, "Using postal-code service");
        let address_provider = Arc::new(ViaCepAddressProvider::new(&config.zip_code_api_url));

        Ok(Self::new(repositories, address_provider, config.private_key))
    }
}

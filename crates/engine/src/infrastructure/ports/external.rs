//! External service ports.

use async_trait::async_trait;
use envlicense_domain::ProviderError;

/// What the postal-code service knows about a zip code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ZipCodeAddress {
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub street: String,
    pub neighborhood: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// `Ok(None)` when the service does not know the zip code.
    async fn get_zip_code_data(
        &self,
        zip_code: &str,
    ) -> Result<Option<ZipCodeAddress>, ProviderError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> Result<String, ProviderError>;
}

//! ViaCEP postal-code client
//!
//! Implements the AddressProvider port against ViaCEP's JSON API
//! (`GET {base}/{zip}/json/`).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use envlicense_domain::{ProviderError, ProviderMethod, ProviderName};

use crate::infrastructure::ports::{AddressProvider, ZipCodeAddress};

pub const DEFAULT_VIACEP_URL: &str = "https://viacep.com.br/ws";

/// Client for the ViaCEP API
#[derive(Clone)]
pub struct ViaCepAddressProvider {
    client: Client,
    base_url: String,
}

impl ViaCepAddressProvider {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    "Failed to build HTTP client, using defaults without timeout"
                );
                Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn provider_error(detail: impl ToString) -> ProviderError {
        let error = ProviderError::new(ProviderName::Address, ProviderMethod::GetZipCodeData)
            .caused_by("reqwest", detail);
        tracing::error!(error = %error, detail = ?error.detail, "Zip code lookup failed");
        error
    }
}

/// ViaCEP answers 200 with `{"erro": true}` (or `"true"`) for unknown zip codes.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag == "true",
            _ => false,
        }
    }
}

#[async_trait]
impl AddressProvider for ViaCepAddressProvider {
    async fn get_zip_code_data(
        &self,
        zip_code: &str,
    ) -> Result<Option<ZipCodeAddress>, ProviderError> {
        let response = self
            .client
            .get(format!("{}/{}/json/", self.base_url, zip_code))
            .send()
            .await
            .map_err(Self::provider_error)?;

        // Malformed zip codes are rejected with 400 before any lookup
        if response.status() == StatusCode::BAD_REQUEST {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::provider_error(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let body: ViaCepResponse = response.json().await.map_err(Self::provider_error)?;
        if body.is_not_found() {
            tracing::debug!(zip_code, "Zip code not found");
            return Ok(None);
        }

        Ok(Some(ZipCodeAddress {
            zip_code: body.cep.replace('-', ""),
            city: body.localidade,
            state: body.uf,
            street: body.logradouro,
            neighborhood: body.bairro,
        }))
    }
}

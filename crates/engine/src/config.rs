//! Process configuration, read once at startup.

use std::fmt;

use crate::infrastructure::zip_code::DEFAULT_VIACEP_URL;

const DEFAULT_APP_NAME: &str = "Environmental Licenses";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 2222;
const DEFAULT_DATABASE_URL: &str = "sqlite:licenses.db?mode=rwc";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DEVELOPMENT" => Ok(Self::Development),
            "PRODUCTION" => Ok(Self::Production),
            _ => Err(ConfigError::Invalid {
                name: "ENVIRONMENT",
                value: value.to_string(),
                reason: "expected DEVELOPMENT or PRODUCTION".to_string(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "DEVELOPMENT"),
            Self::Production => write!(f, "PRODUCTION"),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub app_name: String,
    pub server_host: String,
    pub app_port: u16,
    pub private_key: String,
    pub database_url: String,
    pub zip_code_api_url: String,
}

// The private key stays out of logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("environment", &self.environment)
            .field("app_name", &self.app_name)
            .field("server_host", &self.server_host)
            .field("app_port", &self.app_port)
            .field("private_key", &"<redacted>")
            .field("database_url", &self.database_url)
            .field("zip_code_api_url", &self.zip_code_api_url)
            .finish()
    }
}

impl AppConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let environment = match var("ENVIRONMENT") {
            Some(value) => Environment::parse(&value)?,
            None => Environment::default(),
        };

        let app_port = match var("APP_PORT") {
            Some(value) => value.trim().parse().map_err(|e| ConfigError::Invalid {
                name: "APP_PORT",
                value,
                reason: format!("{e}"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            environment,
            app_name: var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            server_host: var("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            app_port,
            private_key: var("PRIVATE_KEY").ok_or(ConfigError::Missing("PRIVATE_KEY"))?,
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            zip_code_api_url: var("ZIP_CODE_API_URL")
                .unwrap_or_else(|| DEFAULT_VIACEP_URL.to_string()),
        })
    }

    /// Host and port to listen on. The host may be an IP address or a name
    /// resolved when binding.
    pub fn bind_address(&self) -> (&str, u16) {
        (self.server_host.trim(), self.app_port)
    }
}

//! Environmental licenses engine.
//!
//! Everything that runs on the server.
//!
//! ## Structure
//!
//! - `use_cases/` - one struct per business operation
//! - `controllers/` - wire format translation around each use case
//! - `infrastructure/` - ports and their adapters (SQLite, ViaCEP, clock, ids)
//! - `api/` - axum routes
//! - `app` - application composition
//! - `config` - environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod controllers;
pub mod infrastructure;
pub mod use_cases;

#[cfg(test)]
mod test_fixtures;

/// End-to-end tests through the router on in-memory SQLite.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
pub use config::AppConfig;

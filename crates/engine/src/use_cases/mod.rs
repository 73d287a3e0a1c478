//! Use cases - one struct per business operation.
//!
//! Each use case holds the ports it needs, exposes a single `execute`, and
//! stops at the first failure. Failures are returned upward unchanged inside
//! the use case's closed error enum.

pub mod auth;
pub mod companies;
pub mod licenses;

pub use auth::VerifyPrivateKey;
pub use companies::CompanyUseCases;
pub use licenses::LicenseUseCases;

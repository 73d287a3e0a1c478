//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Persistence (companies, licenses)
//! - The postal-code lookup service
//! - Id generation and the clock (for testing)

mod external;
mod repos;
mod testing;

pub use external::{AddressProvider, IdGenerator, ZipCodeAddress};
pub use repos::{CompanyRepo, LicenseRepo, NewCompany, NewLicense};
pub use testing::ClockPort;

#[cfg(test)]
pub use external::{MockAddressProvider, MockIdGenerator};
#[cfg(test)]
pub use repos::{MockCompanyRepo, MockLicenseRepo};
#[cfg(test)]
pub use testing::MockClockPort;

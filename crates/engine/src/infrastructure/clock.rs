//! Clock and id generator implementations.

use crate::infrastructure::ports::{ClockPort, IdGenerator};
use chrono::{DateTime, Utc};
use envlicense_domain::ProviderError;
use uuid::Uuid;

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random v4 UUIDs rendered as hyphenated strings.
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate_id(&self) -> Result<String, ProviderError> {
        Ok(Uuid::new_v4().to_string())
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let generator = UuidIdGenerator::new();
        let first = generator.generate_id().unwrap();
        let second = generator.generate_id().unwrap();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }
}

//! Private key gate run before every authenticated operation.

use envlicense_domain::InvalidPrivateKeyError;

pub struct VerifyPrivateKey {
    expected: String,
}

impl VerifyPrivateKey {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn execute(&self, private_key: &str) -> Result<(), InvalidPrivateKeyError> {
        if private_key == self.expected {
            Ok(())
        } else {
            tracing::warn!("Rejected request with invalid private key");
            Err(InvalidPrivateKeyError)
        }
    }
}

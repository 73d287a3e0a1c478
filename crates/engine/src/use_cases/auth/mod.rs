//! Authorization use cases.

mod verify_private_key;

pub use verify_private_key::VerifyPrivateKey;

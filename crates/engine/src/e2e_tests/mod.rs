//! End-to-end tests through the axum router.
//!
//! Each test builds the whole stack (router, controllers, use cases, SQLite
//! repositories on a private in-memory database) and drives it with
//! `tower::ServiceExt::oneshot`. Only the postal-code service is faked.

mod harness;

pub use harness::*;

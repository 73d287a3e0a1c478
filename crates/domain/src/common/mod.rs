//! Common utility functions shared across the workspace.
//!
//! Pure functions only - no side effects, no I/O.

pub mod datetime;

pub use datetime::{parse_datetime, to_iso_string};

//! Status tags shared by every error record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification carried by every error the service can report.
///
/// The HTTP layer maps each tag to a response status; the tag itself is
/// part of the public error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusError {
    NotFound,
    Invalid,
    AlreadyExists,
    RepositoryError,
    ProviderError,
    Unauthorized,
}

impl StatusError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Invalid => "invalid",
            Self::AlreadyExists => "already_exists",
            Self::RepositoryError => "repository_error",
            Self::ProviderError => "provider_error",
            Self::Unauthorized => "unauthorized",
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can be reported to a caller with a status tag.
///
/// Implemented for every error record and, by exhaustive match, for every
/// use case's error enum.
pub trait ErrorStatus: std::error::Error {
    fn status(&self) -> StatusError;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_matches_as_str() {
        for status in [
            StatusError::NotFound,
            StatusError::Invalid,
            StatusError::AlreadyExists,
            StatusError::RepositoryError,
            StatusError::ProviderError,
            StatusError::Unauthorized,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}

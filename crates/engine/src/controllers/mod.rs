//! Controllers - wire format in, wire format out.
//!
//! Every controller runs the private key gate first, translates the
//! snake_case request into its use case's input, runs the use case and maps
//! the domain result back into a `ResponseSuccess` envelope. No business
//! rule lives here.

use std::future::Future;
use std::time::Instant;

use chrono::{DateTime, Utc};
use envlicense_domain::common::{parse_datetime, to_iso_string};
use envlicense_domain::{
    ErrorStatus, InvalidPrivateKeyError, InvalidRequestError, SoftDeleted, StatusError,
};
use envlicense_shared::{DeletedData, ResponseSuccess};

use crate::use_cases::VerifyPrivateKey;

pub mod companies;
pub mod licenses;

pub use companies::CompanyControllers;
pub use licenses::LicenseControllers;

/// A transport-independent request as the HTTP adapter hands it over.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest<B = (), P = ()> {
    pub body: B,
    pub headers: RequestHeaders,
    pub params: P,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    pub private_key: Option<String>,
}

/// Path parameters of the `/{id}` routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParam {
    pub id: String,
}

/// Outcome of a controller: the success envelope or the failure to render.
pub type ControllerResult<T, E> = Result<ResponseSuccess<T>, ControllerError<E>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError<E> {
    #[error(transparent)]
    Unauthorized(#[from] InvalidPrivateKeyError),
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),
    #[error(transparent)]
    UseCase(E),
}

impl<E: ErrorStatus> ErrorStatus for ControllerError<E> {
    fn status(&self) -> StatusError {
        match self {
            Self::Unauthorized(e) => e.status(),
            Self::InvalidRequest(e) => e.status(),
            Self::UseCase(e) => e.status(),
        }
    }
}

/// Run the private key gate. A missing header is checked as the empty key.
fn authorize(
    gate: &VerifyPrivateKey,
    headers: &RequestHeaders,
) -> Result<(), InvalidPrivateKeyError> {
    gate.execute(headers.private_key.as_deref().unwrap_or_default())
}

/// Await `operation`, logging how long the controller took.
async fn timed<T>(controller: &'static str, operation: impl Future<Output = T>) -> T {
    let started = Instant::now();
    let output = operation.await;
    tracing::debug!(
        controller,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Controller finished"
    );
    output
}

fn parse_date(field: &'static str, value: &str) -> Result<DateTime<Utc>, InvalidRequestError> {
    parse_datetime(value)
        .map_err(|e| InvalidRequestError::new(field, format!("{value:?} is not a date ({e})")))
}

fn parse_optional_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, InvalidRequestError> {
    value.map(|value| parse_date(field, value)).transpose()
}

fn deleted_data<Id: ToString>(deleted: &SoftDeleted<Id>) -> DeletedData {
    DeletedData {
        id: deleted.id.to_string(),
        deleted_at: to_iso_string(&deleted.deleted_at),
    }
}

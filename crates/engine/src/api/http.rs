//! HTTP routes.
//!
//! Handlers only adapt axum extractors into an [`HttpRequest`] and render the
//! controller outcome. Status codes come from the envelope on success and
//! from the error's [`StatusError`] on failure.

use std::fmt::Display;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use envlicense_domain::{ErrorStatus, InvalidPrivateKeyError, StatusError};
use envlicense_shared::{
    CreateCompanyBody, CreateLicenseBody, ErrorBody, ErrorDetail, NotFoundRouteBody,
    ResponseSuccess, StatusSuccess, UpdateCompanyBody, UpdateLicenseBody,
};

use crate::app::App;
use crate::controllers::{ControllerError, HttpRequest, IdParam, RequestHeaders};

const PRIVATE_KEY_HEADER: &str = "private-key";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health-check", get(health))
        .route("/empresas", get(list_companies))
        .route("/empresa/{id}", get(get_company))
        .route("/empresa/insert", post(create_company))
        .route("/empresa/update/{id}", put(update_company))
        .route("/empresa/delete/{id}", delete(delete_company))
        .route("/licencas", get(list_licenses))
        .route("/licenca/{id}", get(get_license))
        .route("/licenca/insert", post(create_license))
        .route("/licenca/update/{id}", put(update_license))
        .route("/licenca/delete/{id}", delete(delete_license))
        .fallback(route_not_found)
}

async fn health() -> &'static str {
    "OK"
}

async fn route_not_found(method: Method, uri: Uri) -> (StatusCode, Json<NotFoundRouteBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundRouteBody {
            code: "not_found".to_string(),
            message: format!("Can't find {} {} on this server.", method, uri.path()),
            status: StatusCode::NOT_FOUND.as_u16(),
        }),
    )
}

// =============================================================================
// Companies
// =============================================================================

async fn list_companies(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let response = app
        .controllers
        .companies
        .list
        .handle(request((), &headers, ()))
        .await?;
    Ok(respond(response))
}

async fn get_company(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let response = app
        .controllers
        .companies
        .get
        .handle(request((), &headers, IdParam { id }))
        .await?;
    Ok(respond(response))
}

async fn create_company(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
    body: Result<Json<CreateCompanyBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    gate(&app, &headers)?;
    let Json(body) = body?;
    let response = app
        .controllers
        .companies
        .create
        .handle(request(body, &headers, ()))
        .await?;
    Ok(respond(response))
}

async fn update_company(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<UpdateCompanyBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    gate(&app, &headers)?;
    let Json(body) = body?;
    let response = app
        .controllers
        .companies
        .update
        .handle(request(body, &headers, IdParam { id }))
        .await?;
    Ok(respond(response))
}

async fn delete_company(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let response = app
        .controllers
        .companies
        .delete
        .handle(request((), &headers, IdParam { id }))
        .await?;
    Ok(respond(response))
}

// =============================================================================
// Licenses
// =============================================================================

async fn list_licenses(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let response = app
        .controllers
        .licenses
        .list
        .handle(request((), &headers, ()))
        .await?;
    Ok(respond(response))
}

async fn get_license(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let response = app
        .controllers
        .licenses
        .get
        .handle(request((), &headers, IdParam { id }))
        .await?;
    Ok(respond(response))
}

async fn create_license(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
    body: Result<Json<CreateLicenseBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    gate(&app, &headers)?;
    let Json(body) = body?;
    let response = app
        .controllers
        .licenses
        .create
        .handle(request(body, &headers, ()))
        .await?;
    Ok(respond(response))
}

async fn update_license(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<UpdateLicenseBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    gate(&app, &headers)?;
    let Json(body) = body?;
    let response = app
        .controllers
        .licenses
        .update
        .handle(request(body, &headers, IdParam { id }))
        .await?;
    Ok(respond(response))
}

async fn delete_license(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let response = app
        .controllers
        .licenses
        .delete
        .handle(request((), &headers, IdParam { id }))
        .await?;
    Ok(respond(response))
}

// =============================================================================
// Helpers
// =============================================================================

fn private_key(headers: &HeaderMap) -> Option<String> {
    headers
        .get(PRIVATE_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Private key check for routes with a body. Runs before the body
/// extraction result is looked at.
fn gate(app: &App, headers: &HeaderMap) -> Result<(), ApiError> {
    let key = private_key(headers);
    app.use_cases
        .verify_private_key
        .execute(key.as_deref().unwrap_or_default())?;
    Ok(())
}

fn request<B, P>(body: B, headers: &HeaderMap, params: P) -> HttpRequest<B, P> {
    HttpRequest {
        body,
        headers: RequestHeaders {
            private_key: private_key(headers),
        },
        params,
    }
}

fn respond<T: Serialize>(envelope: ResponseSuccess<T>) -> Response {
    let status = match envelope.status {
        StatusSuccess::Created => StatusCode::CREATED,
        StatusSuccess::Done => StatusCode::OK,
    };
    (status, Json(envelope)).into_response()
}

/// HTTP status for each error tag.
pub fn http_status(status: StatusError) -> StatusCode {
    match status {
        StatusError::NotFound => StatusCode::NOT_FOUND,
        StatusError::Invalid => StatusCode::BAD_REQUEST,
        StatusError::AlreadyExists => StatusCode::CONFLICT,
        StatusError::Unauthorized => StatusCode::UNAUTHORIZED,
        StatusError::RepositoryError => StatusCode::INTERNAL_SERVER_ERROR,
        StatusError::ProviderError => StatusCode::BAD_GATEWAY,
    }
}

/// A failure rendered as `{"error": {"status", "message"}}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusError,
    message: String,
}

impl<E: ErrorStatus + Display> From<ControllerError<E>> for ApiError {
    fn from(error: ControllerError<E>) -> Self {
        Self {
            status: error.status(),
            message: error.to_string(),
        }
    }
}

impl From<InvalidPrivateKeyError> for ApiError {
    fn from(error: InvalidPrivateKeyError) -> Self {
        Self {
            status: error.status(),
            message: error.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusError::Invalid,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                status: self.status.as_str().to_string(),
                message: self.message,
            },
        };
        (http_status(self.status), Json(body)).into_response()
    }
}

//! Full application stack over in-memory SQLite.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use crate::api;
use crate::app::{App, Repositories};
use crate::infrastructure::clock::{SystemClock, UuidIdGenerator};
use crate::infrastructure::persistence::{
    connect_in_memory, SqliteCompanyRepo, SqliteLicenseRepo,
};
use crate::infrastructure::ports::{ClockPort, IdGenerator, MockAddressProvider};
use crate::test_fixtures::{self, PRIVATE_KEY};

/// The only zip code the fake postal-code service knows.
pub const KNOWN_ZIP_CODE: &str = "01001000";

pub struct TestApi {
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap()
    }
}

impl TestApi {
    pub async fn new() -> Self {
        let pool = connect_in_memory().await.unwrap();
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator::new());
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let companies = SqliteCompanyRepo::new(pool.clone(), ids.clone(), clock.clone())
            .await
            .unwrap();
        let licenses = SqliteLicenseRepo::new(pool, ids, clock).await.unwrap();

        let mut address_provider = MockAddressProvider::new();
        address_provider
            .expect_get_zip_code_data()
            .returning(|zip| {
                Ok((zip == KNOWN_ZIP_CODE).then(|| test_fixtures::zip_address(zip)))
            });

        let app = App::new(
            Repositories {
                companies: Arc::new(companies),
                licenses: Arc::new(licenses),
            },
            Arc::new(address_provider),
            PRIVATE_KEY.to_string(),
        );

        Self {
            router: api::routes().with_state(Arc::new(app)),
        }
    }

    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        private_key: Option<&str>,
        body: Body,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(key) = private_key {
            builder = builder.header("private-key", key);
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            text: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    /// Send an authorized request, with an optional JSON body.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };
        self.send_raw(method, uri, Some(PRIVATE_KEY), body).await
    }

    /// Register a company with the given CNPJ and return its id.
    pub async fn create_company(&self, cnpj: &str) -> String {
        let response = self
            .send(Method::POST, "/empresa/insert", Some(company_body(cnpj)))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.json()["data"]["company_created"]["id"]
            .as_str()
            .unwrap()
            .to_string()
    }
}

pub fn company_body(cnpj: &str) -> Value {
    serde_json::json!({
        "company_info": {
            "corporate_name": "Acme",
            "cnpj": cnpj,
            "address": {
                "zip_code": "01001-000",
                "city": "SP",
                "state": "SP",
                "street": "Main",
                "neighborhood": "Centro",
                "complement": ""
            }
        }
    })
}

pub fn license_body(company_id: &str, license_number: &str) -> Value {
    serde_json::json!({
        "license_info": {
            "license_number": license_number,
            "environmental_agency": "CETESB",
            "emission_date": "2024-01-15",
            "expiration_date": "2028-01-15T00:00:00.000Z"
        },
        "company": { "id": company_id }
    })
}

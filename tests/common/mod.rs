// Shared harness: an in-memory store behind the real router, so every test
// drives the same routes and middleware the binary serves, without Postgres.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use farmer_schemes_api::auth;
use farmer_schemes_api::config::AppConfig;
use farmer_schemes_api::database::models::{
    application::STATUS_SUBMITTED, Application, Eligibility, Farmer, FarmerCredentials, NewFarmer,
    Scheme,
};
use farmer_schemes_api::database::store::{
    ApplicationStore, FarmerStore, SchemeStore, StoreError, StoreHealth,
};
use farmer_schemes_api::routes;
use farmer_schemes_api::state::AppState;

/// In-memory implementation of the store contracts, uniqueness rules
/// included.
#[derive(Default)]
pub struct MemoryStore {
    farmers: Mutex<Vec<(Farmer, String)>>,
    schemes: Mutex<Vec<Scheme>>,
    applications: Mutex<Vec<Application>>,
}

impl MemoryStore {
    pub fn seed_scheme(&self, name: &str, eligibility: Eligibility) -> Scheme {
        let scheme = Scheme {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            eligibility,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.schemes.lock().unwrap().push(scheme.clone());
        scheme
    }

    pub fn farmer_count(&self) -> usize {
        self.farmers.lock().unwrap().len()
    }

    pub fn application_count(&self) -> usize {
        self.applications.lock().unwrap().len()
    }
}

#[async_trait]
impl FarmerStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Farmer>, StoreError> {
        Ok(self
            .farmers
            .lock()
            .unwrap()
            .iter()
            .find(|(f, _)| f.id == id)
            .map(|(f, _)| f.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Farmer>, StoreError> {
        Ok(self
            .farmers
            .lock()
            .unwrap()
            .iter()
            .find(|(f, _)| f.email == email)
            .map(|(f, _)| f.clone()))
    }

    async fn credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<FarmerCredentials>, StoreError> {
        Ok(self
            .farmers
            .lock()
            .unwrap()
            .iter()
            .find(|(f, _)| f.email == email)
            .map(|(f, hash)| FarmerCredentials {
                id: f.id,
                password_hash: hash.clone(),
            }))
    }

    async fn insert(&self, farmer: NewFarmer) -> Result<Farmer, StoreError> {
        let mut farmers = self.farmers.lock().unwrap();
        if farmers.iter().any(|(f, _)| f.email == farmer.email) {
            return Err(StoreError::UniqueViolation(
                "Email already registered".to_string(),
            ));
        }

        let stored = Farmer {
            id: Uuid::new_v4(),
            name: farmer.name,
            email: farmer.email,
            location: farmer.location,
            crops: farmer.crops,
            annual_income: farmer.annual_income,
            land_size: farmer.land_size,
            category: farmer.category,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        farmers.push((stored.clone(), farmer.password_hash));

        Ok(stored)
    }
}

#[async_trait]
impl SchemeStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Scheme>, StoreError> {
        Ok(self.schemes.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Scheme>, StoreError> {
        Ok(self
            .schemes
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn find_by_pair(
        &self,
        farmer_id: Uuid,
        scheme_id: Uuid,
    ) -> Result<Option<Application>, StoreError> {
        Ok(self
            .applications
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.farmer_id == farmer_id && a.scheme_id == scheme_id)
            .cloned())
    }

    async fn insert(&self, farmer_id: Uuid, scheme_id: Uuid) -> Result<Application, StoreError> {
        let mut applications = self.applications.lock().unwrap();
        if applications
            .iter()
            .any(|a| a.farmer_id == farmer_id && a.scheme_id == scheme_id)
        {
            return Err(StoreError::UniqueViolation("Already applied".to_string()));
        }

        let application = Application {
            id: Uuid::new_v4(),
            farmer_id,
            scheme_id,
            status: STATUS_SUBMITTED.to_string(),
            created_at: Utc::now(),
        };
        applications.push(application.clone());

        Ok(application)
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

pub fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        database_url: String::new(),
        database_max_connections: 1,
        jwt_secret: "integration-test-secret".to_string(),
        jwt_expiry_days: 7,
    }
}

pub fn build_app() -> TestApp {
    let store = Arc::new(MemoryStore::default());
    let state = AppState {
        farmers: store.clone(),
        schemes: store.clone(),
        applications: store.clone(),
        health: store.clone(),
        config: Arc::new(test_config()),
    };

    TestApp {
        router: routes::app(state),
        store,
    }
}

/// Sign a token the way the server would, for an arbitrary farmer id.
pub fn token_for(farmer_id: Uuid) -> String {
    auth::issue_token(farmer_id, &test_config()).expect("token signing should succeed")
}

pub async fn get(app: &TestApp, path: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();

    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &TestApp, path: &str, token: Option<&str>, body: Value) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A registration payload matching the profile used across the scenarios:
/// a Punjab wheat grower on three acres.
pub fn sample_farmer_payload() -> Value {
    json!({
        "name": "Harpreet Kaur",
        "email": "harpreet@example.com",
        "password": "monsoon-harvest",
        "location": { "state": "Punjab", "district": "Ludhiana" },
        "crops": ["Wheat"],
        "annualIncome": 50000,
        "landSize": 3,
        "category": "smallholder"
    })
}

/// Register a farmer and return the created representation.
pub async fn register_farmer(app: &TestApp, payload: Value) -> Value {
    let response = post_json(app, "/api/auth/register", None, payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    body_json(response).await
}

/// Log in and return the issued token.
pub async fn login_token(app: &TestApp, email: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/auth/login",
        None,
        json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["token"].as_str().expect("token in response").to_string()
}

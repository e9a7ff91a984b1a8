//! HTTP API Layer
//!
//! REST endpoints over the portfolio storage contract:
//! - Project CRUD and the featured subset
//! - Contact-form submissions and status updates
//! - Aggregate site stats
//!
//! Handlers only validate input and translate storage results into status
//! codes; everything else lives in `portfolio`.

use crate::portfolio::PortfolioStorage;
use axum::{body::Bytes, Router};
use serde_json::Value;
use std::sync::Arc;

// Error type and JSON error responses
pub mod error;

// Project endpoints (GET/POST/PUT/DELETE)
pub mod projects;

// Contact endpoints
pub mod contacts;

// Stats endpoint
pub mod stats;

pub use error::ApiError;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Injected storage backend
    pub storage: Arc<dyn PortfolioStorage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn PortfolioStorage>) -> Self {
        Self { storage }
    }
}

/// All `/api` routes
pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .merge(projects::create_project_routes())
        .merge(contacts::create_contact_routes())
        .merge(stats::create_stats_routes())
}

/// Parse a numeric path id
///
/// Anything that is not a valid id cannot match a record, so callers treat
/// `None` as not-found.
pub(crate) fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Parse a raw request body as JSON; an empty body reads as `{}`
pub(crate) fn parse_json_body(body: &Bytes) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("❌ Malformed JSON body: {}", e);
        ApiError::BadRequest("Malformed JSON body")
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Router-level helpers shared by the endpoint tests

    use crate::portfolio::{
        storage::{StorageError, StorageResult},
        Contact, MemStorage, NewContact, NewProject, NewUser, PortfolioStorage, Project,
        ProjectPatch, User,
    };
    use crate::server::build_app;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    pub fn seeded_app() -> (Router, Arc<MemStorage>) {
        let storage = Arc::new(MemStorage::seeded());
        (build_app(storage.clone()), storage)
    }

    pub fn failing_app() -> Router {
        build_app(Arc::new(FailingStorage))
    }

    pub async fn send_raw(
        app: &Router,
        method: Method,
        uri: &str,
        body: Body,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, value)
    }

    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };
        send_raw(app, method, uri, body).await
    }

    /// Storage whose every call fails, for exercising 500 paths
    pub struct FailingStorage;

    fn down<T>() -> StorageResult<T> {
        Err(StorageError::Unavailable("backend offline".to_string()))
    }

    #[async_trait]
    impl PortfolioStorage for FailingStorage {
        async fn get_user(&self, _id: u64) -> StorageResult<Option<User>> {
            down()
        }
        async fn get_user_by_username(&self, _username: &str) -> StorageResult<Option<User>> {
            down()
        }
        async fn create_user(&self, _user: NewUser) -> StorageResult<User> {
            down()
        }
        async fn get_projects(&self) -> StorageResult<Vec<Project>> {
            down()
        }
        async fn get_featured_projects(&self) -> StorageResult<Vec<Project>> {
            down()
        }
        async fn get_project(&self, _id: u64) -> StorageResult<Option<Project>> {
            down()
        }
        async fn create_project(&self, _project: NewProject) -> StorageResult<Project> {
            down()
        }
        async fn update_project(
            &self,
            _id: u64,
            _patch: ProjectPatch,
        ) -> StorageResult<Option<Project>> {
            down()
        }
        async fn delete_project(&self, _id: u64) -> StorageResult<bool> {
            down()
        }
        async fn get_contacts(&self) -> StorageResult<Vec<Contact>> {
            down()
        }
        async fn create_contact(&self, _contact: NewContact) -> StorageResult<Contact> {
            down()
        }
        async fn update_contact_status(
            &self,
            _id: u64,
            _status: String,
        ) -> StorageResult<Option<Contact>> {
            down()
        }
    }
}

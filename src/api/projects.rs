//! Project management REST endpoints
//!
//! Listing, lookup and CRUD for showcased projects. Bodies are validated
//! into typed records before they reach storage.

use crate::{
    api::{parse_id, parse_json_body, ApiError, AppState},
    portfolio::{schema, Project},
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};

const NOT_FOUND: &str = "Project not found";
const INVALID_DATA: &str = "Invalid project data";

/// Create project routes
pub fn create_project_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/featured", get(list_featured_projects))
        .route(
            "/api/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
}

/// GET /api/projects
/// Returns: every project, newest first
async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state
        .storage
        .get_projects()
        .await
        .map_err(ApiError::internal("Failed to fetch projects"))?;

    Ok(Json(projects))
}

/// GET /api/projects/featured
async fn list_featured_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state
        .storage
        .get_featured_projects()
        .await
        .map_err(ApiError::internal("Failed to fetch featured projects"))?;

    Ok(Json(projects))
}

/// GET /api/projects/{id}
async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let Some(id) = parse_id(&id) else {
        return Err(ApiError::NotFound(NOT_FOUND));
    };

    state
        .storage
        .get_project(id)
        .await
        .map_err(ApiError::internal("Failed to fetch project"))?
        .map(Json)
        .ok_or(ApiError::NotFound(NOT_FOUND))
}

/// POST /api/projects
/// Body: { "title", "description", "technologies": [...], "category", "status", ... }
/// Returns: 201 with the stored project
async fn create_project(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let body = parse_json_body(&body)?;
    let new_project = schema::parse_new_project(&body)
        .map_err(|issues| ApiError::validation(INVALID_DATA, issues))?;

    let project = state
        .storage
        .create_project(new_project)
        .await
        .map_err(ApiError::internal("Failed to create project"))?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{id}
/// Body: any subset of the creation fields
async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Project>, ApiError> {
    let body = parse_json_body(&body)?;
    let patch = schema::parse_project_patch(&body)
        .map_err(|issues| ApiError::validation(INVALID_DATA, issues))?;

    let Some(id) = parse_id(&id) else {
        return Err(ApiError::NotFound(NOT_FOUND));
    };

    state
        .storage
        .update_project(id, patch)
        .await
        .map_err(ApiError::internal("Failed to update project"))?
        .map(Json)
        .ok_or(ApiError::NotFound(NOT_FOUND))
}

/// DELETE /api/projects/{id}
/// Returns: { "message": "Project deleted successfully" }
async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let Some(id) = parse_id(&id) else {
        return Err(ApiError::NotFound(NOT_FOUND));
    };

    let deleted = state
        .storage
        .delete_project(id)
        .await
        .map_err(ApiError::internal("Failed to delete project"))?;

    if !deleted {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    Ok(Json(json!({ "message": "Project deleted successfully" })))
}

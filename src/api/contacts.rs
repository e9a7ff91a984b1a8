//! Contact-form REST endpoints

use crate::{
    api::{parse_id, parse_json_body, ApiError, AppState},
    portfolio::{schema, Contact},
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};

/// Create contact routes
pub fn create_contact_routes() -> Router<AppState> {
    Router::new()
        .route("/api/contacts", get(list_contacts).post(create_contact))
        .route("/api/contacts/{id}/status", put(update_contact_status))
}

/// GET /api/contacts
async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state
        .storage
        .get_contacts()
        .await
        .map_err(ApiError::internal("Failed to fetch contacts"))?;

    Ok(Json(contacts))
}

/// POST /api/contacts
/// Body: { "firstName", "lastName", "email", "projectType", "message" }
/// Status always starts as "new" whatever the body says.
async fn create_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let body = parse_json_body(&body)?;
    let new_contact = schema::parse_new_contact(&body)
        .map_err(|issues| ApiError::validation("Invalid contact data", issues))?;

    let contact = state
        .storage
        .create_contact(new_contact)
        .await
        .map_err(ApiError::internal("Failed to create contact"))?;

    Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /api/contacts/{id}/status
/// Body: { "status": "read" }
async fn update_contact_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Contact>, ApiError> {
    let body = parse_json_body(&body)?;
    let status = schema::parse_status_update(&body).ok_or(ApiError::BadRequest("Status is required"))?;

    let Some(id) = parse_id(&id) else {
        return Err(ApiError::NotFound("Contact not found"));
    };

    state
        .storage
        .update_contact_status(id, status)
        .await
        .map_err(ApiError::internal("Failed to update contact status"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Contact not found"))
}

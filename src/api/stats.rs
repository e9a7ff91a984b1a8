//! Site statistics endpoint

use crate::{
    api::{ApiError, AppState},
    portfolio::types::{SiteStats, NEW_CONTACT_STATUS},
};
use axum::{extract::State, response::Json, routing::get, Router};

/// Page-view counter reported until real analytics exist
pub const PLACEHOLDER_VIEWS: u64 = 1247;

pub fn create_stats_routes() -> Router<AppState> {
    Router::new().route("/api/stats", get(get_stats))
}

/// GET /api/stats
/// Returns: { "totalProjects", "views", "messages" }
async fn get_stats(State(state): State<AppState>) -> Result<Json<SiteStats>, ApiError> {
    let failed = || ApiError::internal("Failed to fetch stats");

    let projects = state.storage.get_projects().await.map_err(failed())?;
    let contacts = state.storage.get_contacts().await.map_err(failed())?;

    let messages = contacts
        .iter()
        .filter(|contact| contact.status == NEW_CONTACT_STATUS)
        .count();

    Ok(Json(SiteStats {
        total_projects: projects.len(),
        views: PLACEHOLDER_VIEWS,
        messages,
    }))
}

use axum::{extract::State, Json};
use chrono::Utc;

use crate::controllers::vote_controllers::models::HealthResponse;
use crate::state::AppState;

/// Liveness plus whether the durable store is configured and reachable.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage_connected = state.backend.is_durable() && state.votes.ping().await;

    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        storage_connected,
        storage_backend: state.backend.name(),
    })
}

use axum::{routing::get, Router};

use crate::controllers::vote_controllers::health;
use crate::state::AppState;

pub mod vote_routes;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api", vote_routes::vote_routes())
        .with_state(state)
}

use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::vote_controllers::{get_results, submit_vote};
use crate::state::AppState;

pub fn vote_routes() -> Router<AppState> {
    Router::new()
        .route("/vote", post(submit_vote::submit_vote))
        .route("/results", get(get_results::get_results))
}

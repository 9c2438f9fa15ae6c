pub mod get_results;
pub mod health;
pub mod models;
pub mod submit_vote;

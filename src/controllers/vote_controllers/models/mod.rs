use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The submission body. Every field is optional at the serde layer so that
/// absence surfaces as a domain validation error instead of a
/// deserialization failure; the validator decides what is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVoteRequest {
    #[serde(default)]
    pub voter_name: Option<String>,
    #[serde(default)]
    pub voter_email: Option<String>,
    #[serde(default)]
    pub vote: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVoteResponse {
    pub success: bool,
    pub message: String,
    pub vote_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub storage_connected: bool,
    pub storage_backend: &'static str,
}

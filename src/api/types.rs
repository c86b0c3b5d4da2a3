//! Wire types for the coaching API.

use serde::{Deserialize, Serialize};

/// Body for POST /api/login.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Response from POST /api/login.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub is_admin: bool,
}

/// Body for POST /api/start.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct StartRequest {
    pub email: String,
    pub role: String,
    pub industry: String,
    pub model_key: String,
}

/// Response from POST /api/start.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct StartResponse {
    pub session_id: String,
    pub questions: Vec<String>,
}

/// Fields for the multipart POST /api/submit. This call is the only one
/// not sent as JSON.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SubmitRequest {
    pub session_id: String,
    pub question: String,
    pub answer_text: String,
}

/// Response from POST /api/submit.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct SubmitResponse {
    pub feedback: String,
}

/// Per-user summary row returned by GET /api/admin/stats.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct UserStats {
    pub email: String,
    pub session_count: u64,
}

/// Response from GET /api/admin/stats.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct StatsResponse {
    pub users: Vec<UserStats>,
}

#[cfg(test)]
#[path = "./types_tests.rs"]
mod tests;

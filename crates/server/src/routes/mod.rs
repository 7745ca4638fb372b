//! API route handlers
//!
//! - `health`: liveness, readiness, and metrics
//! - `scores`: score submission and leaderboard queries
//! - `words`: word dictionary CRUD and random selection

pub mod health;
pub mod scores;
pub mod words;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /).
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Wordgame Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/scores",
            "/api/scores/top",
            "/api/scores/{nickname}/rank",
            "/wordEntry",
            "/wordEntry/getRandomWord",
            "/wordEntry/getCategories",
            "/wordEntry/add",
            "/wordEntry/update/{id}",
            "/wordEntry/delete/{id}",
            "/wordEntry/{id}",
            "/wordEntry/word/{word}",
            "/wordEntry/word/{word}/exists",
            "/wordEntry/category/{category}",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::not_found("Route not found")
}

//! Handler for the welcome endpoint.

use axum::Json;
use serde::Serialize;

/// Static welcome payload.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Returns the static welcome message.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to LocalBiz API".to_string(),
    })
}

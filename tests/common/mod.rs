#![allow(dead_code)]

use localbiz_api::seed;
use localbiz_api::state::AppState;
use serde_json::{Value, json};

/// Builds application state over empty collections.
pub fn create_test_state() -> AppState {
    AppState::new()
}

/// Builds application state with the startup seed business loaded.
pub async fn seeded_state() -> AppState {
    let state = AppState::new();
    state
        .business_service
        .add_business(seed::sample_business())
        .await
        .unwrap();
    state
}

/// A complete job request body with the given id, status, and category.
pub fn job_body(id: &str, status: &str, category: &str) -> Value {
    json!({
        "id": id,
        "title": "Fix leaking faucet",
        "description": "Kitchen faucet drips constantly",
        "budget": 120.0,
        "status": status,
        "category": category,
        "location": "Queens, NY",
        "created_at": "2024-06-10T09:30:00Z"
    })
}

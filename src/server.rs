//! HTTP server initialization and runtime setup.
//!
//! Handles storage construction, seeding, and Axum server lifecycle.

use crate::config::Config;
use crate::routes::app_router;
use crate::seed;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory storage collections
/// - Seed business record
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Seeding fails (poisoned storage lock; cannot happen at startup in practice)
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new();

    let seeded = state
        .business_service
        .add_business(seed::sample_business())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed business directory: {:?}", e))?;
    tracing::info!("Seeded business directory with '{}'", seeded.name);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

//! Cross-origin resource sharing middleware.

use tower_http::cors::{Any, CorsLayer};

/// Creates a CORS middleware permitting any origin, method, and header.
///
/// The directory is a public read-mostly API consumed by browser frontends
/// on arbitrary origins, so the policy is deliberately wide open.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

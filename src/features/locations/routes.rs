use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the locations feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/locations", get(handlers::list_locations))
        .route("/api/locations/{slug}", get(handlers::get_location))
        .with_state(service)
}

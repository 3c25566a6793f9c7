use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::businesses::handlers;
use crate::features::businesses::services::BusinessService;

/// Create routes for the businesses feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<BusinessService>) -> Router {
    Router::new()
        .route("/api/businesses", get(handlers::list_businesses))
        .route("/api/businesses/{slug}", get(handlers::get_business))
        .with_state(service)
}

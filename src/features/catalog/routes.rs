use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::catalog::handlers;
use crate::features::catalog::services::CatalogService;

/// Create routes for the catalog feature
pub fn routes(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/api/catalog", get(handlers::list_products))
        .route("/api/catalog/{code}", get(handlers::get_product))
        .with_state(service)
}

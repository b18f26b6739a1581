// HTTP handlers for the mock marketplace API (server only)
pub mod catalog;

pub use catalog::{recommendations_handler, search_catalog_handler, search_handler};

use axum::routing::get;
use axum::Router;

/// Routes mounted both in the fullstack server and the standalone binary
pub fn api_routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route("/api/search/catalog", get(search_catalog_handler))
        .route("/api/search", get(search_handler))
        .route("/api/recommendations", get(recommendations_handler))
}

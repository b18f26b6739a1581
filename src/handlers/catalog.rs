//! Mock marketplace API
//!
//! Serves the static catalog and recommendation pool so the client can run
//! against `ApiSearchSource` / `ApiRecommendationSource` before a real
//! backend exists.

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use crate::domain::models::{RecommendationItem, SearchFilters, SearchResult};
use crate::domain::services::{mock_data, search};

/// GET /api/search/catalog
pub async fn search_catalog_handler() -> Json<Vec<SearchResult>> {
    Json(mock_data::search_catalog())
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_rating: Option<f32>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// GET /api/search?q=...  server-side matching with the same rules as the widget
pub async fn search_handler(Query(params): Query<SearchParams>) -> Json<Vec<SearchResult>> {
    let filters = SearchFilters {
        location: params.location,
        category: params.category,
        min_rating: params.min_rating,
    };
    let catalog = mock_data::search_catalog();
    Json(search(&catalog, &params.q, &filters, params.limit.unwrap_or(20)))
}

/// GET /api/recommendations
pub async fn recommendations_handler() -> Json<Vec<RecommendationItem>> {
    Json(mock_data::recommendation_pool())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_handler_applies_filters() {
        let params = SearchParams {
            q: "plomb".to_string(),
            location: Some("casablanca".to_string()),
            category: None,
            min_rating: None,
            limit: None,
        };
        let Json(results) = search_handler(Query(params)).await;
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.id == "pro-youssef"));
    }

    #[tokio::test]
    async fn test_recommendations_handler_returns_pool() {
        let Json(items) = recommendations_handler().await;
        assert_eq!(items.len(), mock_data::recommendation_pool().len());
    }
}

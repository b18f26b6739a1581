//! Smart search matching
//!
//! Case-insensitive substring matching of a query against a candidate catalog,
//! composed with the filter panel. The catalog comes from a `SearchSource` so
//! the mock data can be replaced by the REST API without touching the matcher.

use async_trait::async_trait;

use crate::domain::models::{SearchFilters, SearchResult, SearchResultType};
use crate::shared::errors::ApiError;
use crate::shared::logging;
use crate::shared::services::ApiClient;

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// True if the title, subtitle or any tag contains the query (case-insensitive)
pub fn matches_query(result: &SearchResult, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }

    contains_ci(&result.title, &needle)
        || result
            .subtitle
            .as_deref()
            .is_some_and(|subtitle| contains_ci(subtitle, &needle))
        || result.tags.iter().any(|tag| contains_ci(tag, &needle))
}

/// True if every active filter holds for the result
pub fn matches_filters(result: &SearchResult, filters: &SearchFilters) -> bool {
    if let Some(location) = filters.location.as_deref() {
        let location = location.to_lowercase();
        let in_place = result.result_type == SearchResultType::Location
            && contains_ci(&result.title, &location);
        let in_subtitle = result
            .subtitle
            .as_deref()
            .is_some_and(|subtitle| contains_ci(subtitle, &location));
        let in_tags = result.tags.iter().any(|tag| contains_ci(tag, &location));
        if !(in_place || in_subtitle || in_tags) {
            return false;
        }
    }

    if let Some(category) = filters.category.as_deref() {
        let category = category.to_lowercase();
        let is_category = result.result_type == SearchResultType::Category
            && contains_ci(&result.title, &category);
        let in_tags = result.tags.iter().any(|tag| contains_ci(tag, &category));
        if !(is_category || in_tags) {
            return false;
        }
    }

    if let Some(min_rating) = filters.min_rating {
        match result.rating {
            Some(rating) if rating >= min_rating => {}
            _ => return false,
        }
    }

    true
}

/// Match a catalog against a query and filters, keeping catalog order.
/// A blank query yields no results (the widget shows suggestions instead).
pub fn search(
    catalog: &[SearchResult],
    query: &str,
    filters: &SearchFilters,
    limit: usize,
) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let results: Vec<SearchResult> = catalog
        .iter()
        .filter(|result| matches_query(result, query) && matches_filters(result, filters))
        .take(limit)
        .cloned()
        .collect();

    logging::log_search_match(query, catalog.len(), results.len());
    results
}

/// Supplier of search candidates
#[async_trait(?Send)]
pub trait SearchSource {
    fn name(&self) -> &'static str;

    async fn candidates(&self) -> Result<Vec<SearchResult>, ApiError>;
}

/// Static in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct MockSearchSource;

#[async_trait(?Send)]
impl SearchSource for MockSearchSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn candidates(&self) -> Result<Vec<SearchResult>, ApiError> {
        Ok(super::mock_data::search_catalog())
    }
}

/// Catalog served by the marketplace API
#[derive(Debug, Clone)]
pub struct ApiSearchSource {
    client: ApiClient,
}

impl ApiSearchSource {
    pub const ENDPOINT: &'static str = "/api/search/catalog";

    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl SearchSource for ApiSearchSource {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn candidates(&self) -> Result<Vec<SearchResult>, ApiError> {
        self.client.get_json(Self::ENDPOINT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, result_type: SearchResultType, title: &str, tags: &[&str]) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            result_type,
            title: title.to_string(),
            subtitle: None,
            rating: None,
            price: None,
            distance: None,
            availability: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_tag_substring_matches_case_insensitive() {
        let plumber = result("1", SearchResultType::Service, "Réparation fuite", &["plomberie"]);
        assert!(matches_query(&plumber, "plomb"));
        assert!(matches_query(&plumber, "PLOMB"));
    }

    #[test]
    fn test_non_matching_result_is_excluded() {
        let catalog = vec![
            result("1", SearchResultType::Service, "Réparation fuite", &["plomberie"]),
            result("2", SearchResultType::Service, "Taille de haies", &["jardinage"]),
        ];
        let found = search(&catalog, "plomb", &SearchFilters::default(), 10);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");
    }

    #[test]
    fn test_subtitle_and_title_match() {
        let mut pro = result("p", SearchResultType::Professional, "Youssef Benali", &[]);
        pro.subtitle = Some("Électricien à Rabat".to_string());
        assert!(matches_query(&pro, "rabat"));
        assert!(matches_query(&pro, "youssef"));
        assert!(!matches_query(&pro, "casablanca"));
    }

    #[test]
    fn test_blank_query_yields_nothing() {
        let catalog = vec![result("1", SearchResultType::Service, "Ménage", &["nettoyage"])];
        assert!(search(&catalog, "   ", &SearchFilters::default(), 10).is_empty());
    }

    #[test]
    fn test_limit_and_catalog_order() {
        let catalog: Vec<SearchResult> = (0..5)
            .map(|i| result(&i.to_string(), SearchResultType::Service, "Peinture", &[]))
            .collect();
        let found = search(&catalog, "peint", &SearchFilters::default(), 3);
        let ids: Vec<&str> = found.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_location_filter() {
        let mut casa = result("1", SearchResultType::Service, "Plombier", &["plomberie"]);
        casa.subtitle = Some("Casablanca, Maarif".to_string());
        let mut rabat = result("2", SearchResultType::Service, "Plombier", &["plomberie"]);
        rabat.subtitle = Some("Rabat, Agdal".to_string());

        let filters = SearchFilters {
            location: Some("casablanca".to_string()),
            ..Default::default()
        };
        assert!(matches_filters(&casa, &filters));
        assert!(!matches_filters(&rabat, &filters));
    }

    #[test]
    fn test_category_filter_uses_tags() {
        let plumber = result("1", SearchResultType::Service, "Fuite d'eau", &["Plomberie"]);
        let filters = SearchFilters {
            category: Some("plomberie".to_string()),
            ..Default::default()
        };
        assert!(matches_filters(&plumber, &filters));

        let gardener = result("2", SearchResultType::Service, "Tonte", &["jardinage"]);
        assert!(!matches_filters(&gardener, &filters));
    }

    #[test]
    fn test_min_rating_excludes_unrated() {
        let mut rated = result("1", SearchResultType::Professional, "Karim", &[]);
        rated.rating = Some(4.8);
        let unrated = result("2", SearchResultType::Professional, "Samir", &[]);

        let filters = SearchFilters {
            min_rating: Some(4.5),
            ..Default::default()
        };
        assert!(matches_filters(&rated, &filters));
        assert!(!matches_filters(&unrated, &filters));

        rated.rating = Some(4.2);
        assert!(!matches_filters(&rated, &filters));
    }

    #[test]
    fn test_mock_catalog_contains_plumbing() {
        let catalog = crate::domain::services::mock_data::search_catalog();
        let found = search(&catalog, "plomb", &SearchFilters::default(), 20);
        assert!(!found.is_empty());
        assert!(found.iter().all(|r| matches_query(r, "plomb")));
    }
}

//! Personalized recommendation ranking
//!
//! Filter by preference tags, sort by a composite key, truncate:
//! 1. primary score (match_score, else popularity, else 0), descending
//! 2. urgency rank (high=3, medium=2, low/absent=1), descending
//! 3. distance, ascending; items without a distance come last
//!
//! The sort is stable so equal items keep their pool order.

use std::cmp::Ordering;

use async_trait::async_trait;

use crate::domain::models::RecommendationItem;
use crate::shared::errors::ApiError;
use crate::shared::logging;
use crate::shared::services::ApiClient;
use crate::shared::utils::timer;

pub const DEFAULT_MAX_ITEMS: usize = 6;

/// Keep items with at least one tag containing at least one preference.
/// No preferences keeps everything.
pub fn matches_preferences(item: &RecommendationItem, preferences_lower: &[String]) -> bool {
    if preferences_lower.is_empty() {
        return true;
    }
    item.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        preferences_lower.iter().any(|pref| tag.contains(pref.as_str()))
    })
}

/// Composite ordering, "better" items compare as Less
pub fn compare_items(a: &RecommendationItem, b: &RecommendationItem) -> Ordering {
    b.primary_score()
        .total_cmp(&a.primary_score())
        .then_with(|| b.urgency_rank().cmp(&a.urgency_rank()))
        .then_with(|| {
            let da = a.distance.unwrap_or(f32::INFINITY);
            let db = b.distance.unwrap_or(f32::INFINITY);
            da.total_cmp(&db)
        })
}

/// Rank recommendation candidates. Pure: same inputs, same order.
pub fn rank_recommendations(
    items: &[RecommendationItem],
    preferences: &[String],
    max_items: usize,
) -> Vec<RecommendationItem> {
    let preferences_lower: Vec<String> = preferences
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();

    let mut ranked: Vec<RecommendationItem> = items
        .iter()
        .filter(|item| matches_preferences(item, &preferences_lower))
        .cloned()
        .collect();
    let after_filter = ranked.len();

    ranked.sort_by(compare_items);
    ranked.truncate(max_items);

    logging::log_ranking(items.len(), after_filter, ranked.len());
    ranked
}

/// Supplier of recommendation candidates
#[async_trait(?Send)]
pub trait RecommendationSource {
    fn name(&self) -> &'static str;

    async fn candidates(&self) -> Result<Vec<RecommendationItem>, ApiError>;
}

/// Static pool behind an artificial network delay
#[derive(Debug, Clone)]
pub struct MockRecommendationSource {
    latency_ms: u64,
}

impl MockRecommendationSource {
    pub fn new(latency_ms: u64) -> Self {
        Self { latency_ms }
    }
}

impl Default for MockRecommendationSource {
    fn default() -> Self {
        Self::new(800)
    }
}

#[async_trait(?Send)]
impl RecommendationSource for MockRecommendationSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn candidates(&self) -> Result<Vec<RecommendationItem>, ApiError> {
        if self.latency_ms > 0 {
            timer::sleep_ms(self.latency_ms).await;
        }
        Ok(super::mock_data::recommendation_pool())
    }
}

/// Candidates served by the marketplace API
#[derive(Debug, Clone)]
pub struct ApiRecommendationSource {
    client: ApiClient,
}

impl ApiRecommendationSource {
    pub const ENDPOINT: &'static str = "/api/recommendations";

    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl RecommendationSource for ApiRecommendationSource {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn candidates(&self) -> Result<Vec<RecommendationItem>, ApiError> {
        self.client.get_json(Self::ENDPOINT).await
    }
}

/// Fetch candidates and return only the ranked slice
pub async fn load_recommendations(
    source: &dyn RecommendationSource,
    preferences: &[String],
    max_items: usize,
) -> Result<Vec<RecommendationItem>, ApiError> {
    logging::log_recommendation_load_start(source.name());
    let candidates = source.candidates().await.inspect_err(|e| {
        logging::log_recommendation_load_error(source.name(), &e.to_string());
    })?;
    Ok(rank_recommendations(&candidates, preferences, max_items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{RecommendationType, Urgency};

    fn item(id: &str) -> RecommendationItem {
        RecommendationItem {
            id: id.to_string(),
            item_type: RecommendationType::Service,
            title: format!("Item {}", id),
            subtitle: None,
            rating: None,
            price: None,
            original_price: None,
            discount: None,
            distance: None,
            availability: None,
            reason: "test".to_string(),
            tags: vec![],
            urgency: None,
            popularity: None,
            match_score: None,
        }
    }

    fn ids(items: &[RecommendationItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn abc() -> Vec<RecommendationItem> {
        let mut a = item("A");
        a.match_score = Some(95.0);
        a.urgency = Some(Urgency::High);
        a.distance = Some(1.2);

        let mut b = item("B");
        b.popularity = Some(92.0);
        b.urgency = Some(Urgency::Low);
        b.distance = Some(3.5);

        let mut c = item("C");
        c.match_score = Some(95.0);
        c.urgency = Some(Urgency::High);
        c.distance = Some(0.5);

        vec![a, b, c]
    }

    #[test]
    fn test_distance_breaks_score_and_urgency_tie() {
        let ranked = rank_recommendations(&abc(), &[], 2);
        assert_eq!(ids(&ranked), vec!["C", "A"]);
    }

    #[test]
    fn test_full_order_without_truncation() {
        let ranked = rank_recommendations(&abc(), &[], DEFAULT_MAX_ITEMS);
        assert_eq!(ids(&ranked), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_preference_filter_excludes_unrelated_tags() {
        let mut garden = item("G");
        garden.tags = vec!["jardinage".to_string(), "automne".to_string()];
        garden.match_score = Some(99.0);

        let mut plumbing = item("P");
        plumbing.tags = vec!["Plomberie".to_string(), "urgence".to_string()];
        plumbing.match_score = Some(10.0);

        let ranked = rank_recommendations(&[garden, plumbing], &["plomberie".to_string()], 6);
        assert_eq!(ids(&ranked), vec!["P"]);
    }

    #[test]
    fn test_preference_is_substring_of_tag() {
        let mut plumbing = item("P");
        plumbing.tags = vec!["plomberie-urgente".to_string()];
        let ranked = rank_recommendations(&[plumbing], &["PLOMB".to_string()], 6);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_urgency_breaks_score_tie() {
        let mut low = item("low");
        low.popularity = Some(80.0);
        low.urgency = Some(Urgency::Low);
        let mut medium = item("medium");
        medium.popularity = Some(80.0);
        medium.urgency = Some(Urgency::Medium);
        let absent = {
            let mut i = item("absent");
            i.popularity = Some(80.0);
            i
        };

        let ranked = rank_recommendations(&[low, absent, medium], &[], 6);
        // low and absent tie at rank 1 and keep pool order
        assert_eq!(ids(&ranked), vec!["medium", "low", "absent"]);
    }

    #[test]
    fn test_match_score_takes_precedence_over_popularity() {
        let mut popular = item("popular");
        popular.popularity = Some(99.0);
        popular.match_score = Some(50.0);
        let mut matched = item("matched");
        matched.match_score = Some(70.0);

        let ranked = rank_recommendations(&[popular, matched], &[], 6);
        assert_eq!(ids(&ranked), vec!["matched", "popular"]);
    }

    #[test]
    fn test_missing_distance_sorts_last_on_tie() {
        let mut far = item("far");
        far.distance = Some(12.0);
        let unknown = item("unknown");
        let ranked = rank_recommendations(&[unknown, far], &[], 6);
        assert_eq!(ids(&ranked), vec!["far", "unknown"]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let pool = crate::domain::services::mock_data::recommendation_pool();
        let prefs = vec!["ménage".to_string(), "plomberie".to_string()];
        let first = rank_recommendations(&pool, &prefs, 6);
        let second = rank_recommendations(&pool, &prefs, 6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_truncation_on_mock_pool() {
        let pool = crate::domain::services::mock_data::recommendation_pool();
        assert!(pool.len() > DEFAULT_MAX_ITEMS);
        let ranked = rank_recommendations(&pool, &[], DEFAULT_MAX_ITEMS);
        assert_eq!(ranked.len(), DEFAULT_MAX_ITEMS);
        for pair in ranked.windows(2) {
            assert_ne!(compare_items(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[tokio::test]
    async fn test_load_recommendations_from_mock_source() {
        let source = MockRecommendationSource::new(0);
        let ranked = load_recommendations(&source, &[], 3).await.unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked, rank_recommendations(&crate::domain::services::mock_data::recommendation_pool(), &[], 3));
    }

    #[tokio::test]
    async fn test_load_recommendations_propagates_api_errors() {
        struct Failing;

        #[async_trait(?Send)]
        impl RecommendationSource for Failing {
            fn name(&self) -> &'static str {
                "failing"
            }

            async fn candidates(&self) -> Result<Vec<RecommendationItem>, ApiError> {
                Err(ApiError::network("offline"))
            }
        }

        let err = load_recommendations(&Failing, &[], 6).await.unwrap_err();
        assert!(err.is_network());
    }
}

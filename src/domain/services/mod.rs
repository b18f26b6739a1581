// Domain services: matching and ranking, isolated from their data sources
pub mod mock_data;
pub mod ranking;
pub mod search_engine;

pub use ranking::{
    load_recommendations, rank_recommendations, ApiRecommendationSource,
    MockRecommendationSource, RecommendationSource, DEFAULT_MAX_ITEMS,
};
pub use search_engine::{
    matches_filters, matches_query, search, ApiSearchSource, MockSearchSource, SearchSource,
};

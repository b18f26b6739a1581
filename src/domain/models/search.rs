use serde::{Deserialize, Serialize};

/// Kind of entry a search can surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultType {
    Service,
    Professional,
    Location,
    Category,
}

impl SearchResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchResultType::Service => "service",
            SearchResultType::Professional => "professional",
            SearchResultType::Location => "location",
            SearchResultType::Category => "category",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SearchResultType::Service => "Service",
            SearchResultType::Professional => "Professionnel",
            SearchResultType::Location => "Ville",
            SearchResultType::Category => "Catégorie",
        }
    }
}

/// Search result (transient, lives for one debounce cycle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    #[serde(rename = "type")]
    pub result_type: SearchResultType,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    /// Starting price in MAD
    #[serde(default)]
    pub price: Option<u32>,
    /// Distance in km
    #[serde(default)]
    pub distance: Option<f32>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Structured filters from the filter panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub location: Option<String>,
    pub category: Option<String>,
    pub min_rating: Option<f32>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.category.is_none() && self.min_rating.is_none()
    }

    /// Number of active filters (shown as a badge on the filter toggle)
    pub fn active_count(&self) -> usize {
        [
            self.location.is_some(),
            self.category.is_some(),
            self.min_rating.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// Search query as debounced by the widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub filters: SearchFilters,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: SearchFilters::default(),
        }
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }
}

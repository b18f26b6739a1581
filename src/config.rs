//! Application configuration
//!
//! Defaults match the widget contracts (300ms debounce, 6 recommendations).
//! Native builds can override values through `KHIDMA_*` environment variables;
//! the WASM client always starts from defaults.

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3401";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Input inactivity before matching runs
    pub debounce_ms: u64,
    pub max_results: usize,
    pub recent_capacity: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            max_results: 8,
            recent_capacity: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationSettings {
    pub max_items: usize,
    /// Artificial latency of the mock source
    pub simulated_latency_ms: u64,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            max_items: crate::domain::services::ranking::DEFAULT_MAX_ITEMS,
            simulated_latency_ms: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Use the mock data sources instead of the REST API
    pub use_mock_data: bool,
    pub search: SearchSettings,
    pub recommendations: RecommendationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            use_mock_data: true,
            search: SearchSettings::default(),
            recommendations: RecommendationSettings::default(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON config document, missing fields take their defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Build config from `KHIDMA_*` environment variables
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self> {
        Ok(Self::default())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("KHIDMA_API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Some(raw) = lookup("KHIDMA_USE_MOCK_DATA") {
            config.use_mock_data = parse_var("KHIDMA_USE_MOCK_DATA", &raw)?;
        }
        if let Some(raw) = lookup("KHIDMA_SEARCH_DEBOUNCE_MS") {
            config.search.debounce_ms = parse_var("KHIDMA_SEARCH_DEBOUNCE_MS", &raw)?;
        }
        if let Some(raw) = lookup("KHIDMA_SEARCH_MAX_RESULTS") {
            config.search.max_results = parse_var("KHIDMA_SEARCH_MAX_RESULTS", &raw)?;
        }
        if let Some(raw) = lookup("KHIDMA_RECOMMENDATIONS_MAX_ITEMS") {
            config.recommendations.max_items =
                parse_var("KHIDMA_RECOMMENDATIONS_MAX_ITEMS", &raw)?;
        }
        if let Some(raw) = lookup("KHIDMA_RECOMMENDATIONS_LATENCY_MS") {
            config.recommendations.simulated_latency_ms =
                parse_var("KHIDMA_RECOMMENDATIONS_LATENCY_MS", &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config("api_base_url must not be empty".to_string()));
        }
        if self.search.max_results == 0 {
            return Err(AppError::Config("search.max_results must be at least 1".to_string()));
        }
        if self.recommendations.max_items == 0 {
            return Err(AppError::Config(
                "recommendations.max_items must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("invalid value for {}: {:?}", key, raw)))
}

//! Data sources handed to the widgets
//!
//! Chooses between the in-memory mock pools and the REST API from config so
//! the matching/ranking functions never know where their data comes from.

use std::rc::Rc;

use crate::config::AppConfig;
use crate::domain::services::{
    ApiRecommendationSource, ApiSearchSource, MockRecommendationSource, MockSearchSource,
    RecommendationSource, SearchSource,
};
use crate::shared::services::api_client::{ApiClient, TokenSource};

#[derive(Clone)]
pub struct DataSources {
    pub search: Rc<dyn SearchSource>,
    pub recommendations: Rc<dyn RecommendationSource>,
}

impl DataSources {
    pub fn from_config(config: &AppConfig, token: TokenSource) -> Self {
        if config.use_mock_data {
            return Self {
                search: Rc::new(MockSearchSource),
                recommendations: Rc::new(MockRecommendationSource::new(
                    config.recommendations.simulated_latency_ms,
                )),
            };
        }

        let client = ApiClient::new(config.api_base_url.clone()).with_token_source(token);
        Self {
            search: Rc::new(ApiSearchSource::new(client.clone())),
            recommendations: Rc::new(ApiRecommendationSource::new(client)),
        }
    }
}

impl PartialEq for DataSources {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.search, &other.search)
            && Rc::ptr_eq(&self.recommendations, &other.recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_flag_selects_mock_sources() {
        let sources = DataSources::from_config(&AppConfig::default(), Rc::new(|| None::<String>));
        assert_eq!(sources.search.name(), "mock");
        assert_eq!(sources.recommendations.name(), "mock");
    }

    #[test]
    fn test_api_sources_when_mock_disabled() {
        let config = AppConfig {
            use_mock_data: false,
            ..Default::default()
        };
        let sources = DataSources::from_config(&config, Rc::new(|| Some("t".to_string())));
        assert_eq!(sources.search.name(), "api");
        assert_eq!(sources.recommendations.name(), "api");
    }
}

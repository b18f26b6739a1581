use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::shared::services::DataSources;

/// Provide config and data sources to the tree (call once in `App`)
pub fn use_app_context_provider(config: AppConfig) -> (AppConfig, DataSources) {
    let config = use_context_provider(|| config);
    let session = super::use_session();
    let sources = use_context_provider(|| {
        DataSources::from_config(&config, Rc::new(move || session.current_token()))
    });
    (config, sources)
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

pub fn use_data_sources() -> DataSources {
    use_context::<DataSources>()
}

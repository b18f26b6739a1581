// Shared services
pub mod api_client;
pub mod data_sources;

pub use api_client::ApiClient;
pub use data_sources::DataSources;

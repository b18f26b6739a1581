// Custom Dioxus hooks
pub mod use_app_context;
pub mod use_recommendations;
pub mod use_reveal;
pub mod use_session;
pub mod use_smart_search;
pub mod use_toasts;

pub use use_app_context::{use_app_config, use_app_context_provider, use_data_sources};
pub use use_recommendations::{use_recommendations, LoadParams, RecommendationsState};
pub use use_reveal::{use_reveal, RevealHandle};
pub use use_session::{use_session, use_session_provider, SessionContext};
pub use use_smart_search::{use_smart_search, SmartSearchState};
pub use use_toasts::{use_toast_provider, use_toasts, Toast, ToastKind, ToastQueue, ToastState};

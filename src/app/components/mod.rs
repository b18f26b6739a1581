pub mod button;
pub mod common;
pub mod filter_panel;
pub mod icon;
pub mod recommendations;
pub mod reveal;
pub mod smart_search;
pub mod toast;

pub use button::{Button, ButtonVariant};
pub use common::{EmptyState, ErrorMessage, LoadingSkeleton};
pub use filter_panel::FilterPanel;
pub use icon::Icon;
pub use recommendations::{PersonalizedRecommendations, RecommendationCard};
pub use reveal::Reveal;
pub use smart_search::SmartSearch;
pub use toast::ToastHost;

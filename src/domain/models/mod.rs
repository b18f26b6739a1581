// Domain models (marketplace entities)
// Pure Rust, no framework dependencies
pub mod search;
pub mod recommendation;
pub mod session;

pub use search::{SearchFilters, SearchQuery, SearchResult, SearchResultType};
pub use recommendation::{RecommendationItem, RecommendationType, Urgency};
pub use session::{AuthSession, User, UserRole};

//! Structured logging helpers for khidma-web
//!
//! Provides consistent, contextual logging across the search and
//! recommendation widgets. Uses structured tracing fields.

/// Operation tags attached to every log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SearchMatch,
    Ranking,
    RecommendationLoad,
    Session,
    ApiRequest,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SearchMatch => "search_match",
            LogOperation::Ranking => "ranking",
            LogOperation::RecommendationLoad => "recommendation_load",
            LogOperation::Session => "session",
            LogOperation::ApiRequest => "api_request",
        }
    }
}

/// Log a completed search match
pub fn log_search_match(query: &str, candidates: usize, matched: usize) {
    tracing::debug!(
        operation = LogOperation::SearchMatch.as_str(),
        query = query,
        candidates = candidates,
        matched = matched,
        "Search matched"
    );
}

/// Log a ranking pass
pub fn log_ranking(candidates: usize, after_filter: usize, returned: usize) {
    tracing::debug!(
        operation = LogOperation::Ranking.as_str(),
        candidates = candidates,
        after_filter = after_filter,
        returned = returned,
        "Recommendations ranked"
    );
}

/// Log recommendation load start
pub fn log_recommendation_load_start(source: &str) {
    tracing::debug!(
        operation = LogOperation::RecommendationLoad.as_str(),
        source = source,
        "Loading recommendations"
    );
}

/// Log recommendation load failure
pub fn log_recommendation_load_error(source: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::RecommendationLoad.as_str(),
        source = source,
        error = error,
        "Failed to load recommendations"
    );
}

/// Log session lifecycle events (login, logout, restore)
pub fn log_session_event(event: &str, user_id: Option<&str>) {
    tracing::info!(
        operation = LogOperation::Session.as_str(),
        event = event,
        user_id = user_id.unwrap_or("-"),
        "Session event"
    );
}

/// Log an API request failure
pub fn log_api_error(endpoint: &str, status: u16, message: &str) {
    tracing::warn!(
        operation = LogOperation::ApiRequest.as_str(),
        endpoint = endpoint,
        status = status,
        message = message,
        "API request failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::SearchMatch.as_str(), "search_match");
        assert_eq!(LogOperation::Ranking.as_str(), "ranking");
        assert_eq!(LogOperation::RecommendationLoad.as_str(), "recommendation_load");
        assert_eq!(LogOperation::Session.as_str(), "session");
        assert_eq!(LogOperation::ApiRequest.as_str(), "api_request");
    }
}

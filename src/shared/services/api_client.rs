//! REST client for the marketplace API
//!
//! gloo-net in the browser, reqwest on native. Transport failures surface as
//! `ApiError` with status 0 so callers can branch on it for toasts.

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::shared::errors::{ApiError, ApiErrorBody};
use crate::shared::logging;

/// Yields the bearer token at request time, so login and logout apply to
/// clients created before them
pub type TokenSource = Rc<dyn Fn() -> Option<String>>;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<TokenSource>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.bearer().is_some())
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Read the bearer token from `source` on every request
    pub fn with_token_source(mut self, source: TokenSource) -> Self {
        self.token = Some(source);
        self
    }

    /// Token the next request will carry
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().and_then(|source| source())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// GET an endpoint and decode its JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.url_for(endpoint);
        let (status, body) = self.fetch_text(&url).await.inspect_err(|e| {
            logging::log_api_error(endpoint, e.status, &e.message);
        })?;

        if !(200..300).contains(&status) {
            let err = ApiErrorBody::into_error(status, &body);
            logging::log_api_error(endpoint, err.status, &err.message);
            return Err(err);
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::new(status, format!("Réponse invalide du serveur: {}", e)))
    }

    #[cfg(target_arch = "wasm32")]
    async fn fetch_text(&self, url: &str) -> Result<(u16, String), ApiError> {
        use gloo_net::http::Request;

        let mut request = Request::get(url).header("Accept", "application/json");
        if let Some(token) = self.bearer() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        Ok((status, body))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn fetch_text(&self, url: &str) -> Result<(u16, String), ApiError> {
        let client = reqwest::Client::new();
        let mut request = client.get(url).header("Accept", "application/json");
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        Ok((status, body))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_slashes() {
        let client = ApiClient::new("http://localhost:3401/");
        assert_eq!(
            client.url_for("/api/recommendations"),
            "http://localhost:3401/api/recommendations"
        );
        assert_eq!(
            client.url_for("api/search/catalog"),
            "http://localhost:3401/api/search/catalog"
        );
    }

    #[test]
    fn test_bearer_follows_session_changes() {
        use std::cell::RefCell;

        let session_token = Rc::new(RefCell::new(Some("old".to_string())));
        let source = {
            let session_token = session_token.clone();
            Rc::new(move || session_token.borrow().clone())
        };
        let client = ApiClient::new("http://localhost:3401").with_token_source(source);
        assert_eq!(client.bearer().as_deref(), Some("old"));

        *session_token.borrow_mut() = None;
        assert_eq!(client.bearer(), None);

        *session_token.borrow_mut() = Some("new".to_string());
        assert_eq!(client.bearer().as_deref(), Some("new"));
    }

    #[test]
    fn test_client_without_source_is_anonymous() {
        assert_eq!(ApiClient::default().bearer(), None);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let client = ApiClient::new("http://127.0.0.1:9");
        let result: Result<Vec<String>, ApiError> = client.get_json("/api/anything").await;
        let err = result.unwrap_err();
        assert!(err.is_network());
    }
}

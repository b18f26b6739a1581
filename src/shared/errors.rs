use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Status used when the request never reached the server
pub const STATUS_NETWORK: u16 = 0;

/// Failure reported by the marketplace REST API
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("HTTP {status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(STATUS_NETWORK, message)
    }

    pub fn is_network(&self) -> bool {
        self.status == STATUS_NETWORK
    }

    /// Message shown to the user in a toast
    pub fn user_message(&self) -> String {
        match self.status {
            STATUS_NETWORK => {
                "Erreur de connexion. Vérifiez votre connexion internet et réessayez.".to_string()
            }
            401 => "Votre session a expiré. Veuillez vous reconnecter.".to_string(),
            409 => "Un compte existe déjà avec cette adresse e-mail.".to_string(),
            _ if !self.message.trim().is_empty() => self.message.clone(),
            _ => "Une erreur est survenue. Veuillez réessayer.".to_string(),
        }
    }
}

/// Error body returned by the API (`{"message": "..."}`)
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Build an ApiError from a status and raw response text
    pub fn into_error(status: u16, raw: &str) -> ApiError {
        let message = serde_json::from_str::<ApiErrorBody>(raw)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_default();
        ApiError::new(status, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_account_exists() {
        let err = ApiError::new(409, "duplicate key");
        assert_eq!(
            err.user_message(),
            "Un compte existe déjà avec cette adresse e-mail."
        );
    }

    #[test]
    fn test_network_failure_maps_to_connection_error() {
        let err = ApiError::network("fetch failed");
        assert!(err.is_network());
        assert!(err.user_message().starts_with("Erreur de connexion"));
    }

    #[test]
    fn test_other_status_uses_server_message_or_fallback() {
        assert_eq!(ApiError::new(422, "Téléphone invalide").user_message(), "Téléphone invalide");
        assert_eq!(
            ApiError::new(500, "  ").user_message(),
            "Une erreur est survenue. Veuillez réessayer."
        );
    }

    #[test]
    fn test_error_body_parsing() {
        let err = ApiErrorBody::into_error(400, r#"{"message":"Champ manquant"}"#);
        assert_eq!(err, ApiError::new(400, "Champ manquant"));

        let err = ApiErrorBody::into_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status, 502);
        assert!(err.message.is_empty());
    }
}

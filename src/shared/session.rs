//! Session lifecycle (login / logout / restore)
//!
//! Plain state object; the component tree receives it through
//! `hooks::use_session_provider`.

use crate::domain::models::{AuthSession, User, UserRole};
use crate::shared::logging;
use crate::shared::utils::storage;

pub const SESSION_STORAGE_KEY: &str = "khidma_session";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    current: Option<AuthSession>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(session: AuthSession) -> Self {
        Self {
            current: Some(session),
        }
    }

    /// Restore a persisted session (browser only)
    pub fn restore() -> Self {
        match storage::get_json::<AuthSession>(SESSION_STORAGE_KEY) {
            Ok(Some(saved)) => {
                logging::log_session_event("restore", Some(&saved.user.id));
                Self::authenticated(saved)
            }
            Ok(None) => Self::anonymous(),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored session: {}", e);
                let _ = storage::remove_item(SESSION_STORAGE_KEY);
                Self::anonymous()
            }
        }
    }

    pub fn login(&mut self, session: AuthSession) {
        logging::log_session_event("login", Some(&session.user.id));
        if let Err(e) = storage::set_json(SESSION_STORAGE_KEY, &session) {
            tracing::warn!("Failed to persist session: {}", e);
        }
        self.current = Some(session);
    }

    pub fn logout(&mut self) {
        let user_id = self.current.as_ref().map(|s| s.user.id.clone());
        logging::log_session_event("logout", user_id.as_deref());
        if let Err(e) = storage::remove_item(SESSION_STORAGE_KEY) {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
        self.current = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user().map(|u| u.role)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }
}

/// Demo account used by the navbar until the auth API is wired
pub fn demo_client_session() -> AuthSession {
    AuthSession {
        user: User {
            id: "usr-demo".to_string(),
            first_name: "Amina".to_string(),
            last_name: "Alaoui".to_string(),
            email: "amina.alaoui@example.ma".to_string(),
            role: UserRole::Client,
            city: Some("Casablanca".to_string()),
        },
        token: "demo-token".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout_lifecycle() {
        let mut session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);

        session.login(demo_client_session());
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(UserRole::Client));
        assert_eq!(session.token(), Some("demo-token"));
        assert_eq!(session.user().map(|u| u.initials()), Some("AA".to_string()));

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_restore_on_native_is_anonymous() {
        assert_eq!(Session::restore(), Session::anonymous());
    }
}

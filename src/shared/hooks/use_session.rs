use dioxus::prelude::*;

use crate::domain::models::{AuthSession, User, UserRole};
use crate::shared::session::Session;

/// Session handle shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    session: Signal<Session>,
}

impl SessionContext {
    pub fn login(&mut self, auth: AuthSession) {
        self.session.write().login(auth);
    }

    pub fn logout(&mut self) {
        self.session.write().logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.read().role()
    }

    /// Token without subscribing the caller; for use outside rendering
    pub fn current_token(&self) -> Option<String> {
        self.session.peek().token().map(str::to_string)
    }
}

/// Create the session context, restoring any persisted session
pub fn use_session_provider() -> SessionContext {
    use_context_provider(|| SessionContext {
        session: Signal::new(Session::restore()),
    })
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

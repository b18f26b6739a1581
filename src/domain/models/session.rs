use serde::{Deserialize, Serialize};

/// Marketplace role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Professional,
}

impl UserRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Client => "Client",
            UserRole::Professional => "Professionnel",
        }
    }
}

/// Authenticated user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub city: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Logged-in session (user + bearer token)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

//! Synchronous form validation, rendered inline next to each field

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::domain::models::{AuthSession, User, UserRole};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// +212 or 0, then an operator prefix 5/6/7 and eight digits
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+212|0)[5-7][0-9]{8}$").expect("valid phone regex"));

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        Some("L'adresse e-mail est requise")
    } else if !EMAIL_RE.is_match(email) {
        Some("Adresse e-mail invalide")
    } else {
        None
    }
}

/// Spaces, dots and dashes are ignored ("06 12-34.56 78")
pub fn validate_phone(phone: &str) -> Option<&'static str> {
    let normalized: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '.')
        .collect();
    if normalized.is_empty() {
        Some("Le numéro de téléphone est requis")
    } else if !PHONE_RE.is_match(&normalized) {
        Some("Numéro marocain invalide (ex: 06 12 34 56 78)")
    } else {
        None
    }
}

pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Le mot de passe doit contenir au moins 8 caractères")
    } else if !password.chars().any(|c| c.is_alphabetic())
        || !password.chars().any(|c| c.is_ascii_digit())
    {
        Some("Le mot de passe doit contenir des lettres et des chiffres")
    } else {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// All field errors, in form order. Empty means valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut push = |field, message: Option<&'static str>| {
            if let Some(message) = message {
                errors.push(FieldError { field, message });
            }
        };

        push(
            Field::FirstName,
            self.first_name.trim().is_empty().then_some("Le prénom est requis"),
        );
        push(
            Field::LastName,
            self.last_name.trim().is_empty().then_some("Le nom est requis"),
        );
        push(Field::Email, validate_email(&self.email));
        push(Field::Phone, validate_phone(&self.phone));
        push(Field::Password, validate_password(&self.password));
        push(
            Field::ConfirmPassword,
            (self.password != self.confirm_password)
                .then_some("Les mots de passe ne correspondent pas"),
        );

        errors
    }

    pub fn error_for(errors: &[FieldError], field: Field) -> Option<&'static str> {
        errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    /// Validate, then open a local session for the new account
    pub fn register(&self, role: UserRole, city: Option<String>) -> Result<AuthSession, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let id = Uuid::new_v4();
        Ok(AuthSession {
            user: User {
                id: format!("usr-{}", id),
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email: self.email.trim().to_lowercase(),
                role,
                city,
            },
            token: format!("local-{}", id.simple()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert_eq!(validate_email("amina@example.ma"), None);
        assert!(validate_email("amina@").is_some());
        assert!(validate_email("").is_some());
    }

    #[test]
    fn test_moroccan_phone_formats() {
        assert_eq!(validate_phone("0612345678"), None);
        assert_eq!(validate_phone("+212712345678"), None);
        assert_eq!(validate_phone("06 12 34 56 78"), None);
        assert_eq!(validate_phone("05-22.12.34.56"), None);
        assert!(validate_phone("0812345678").is_some());
        assert!(validate_phone("061234567").is_some());
        assert!(validate_phone("+33612345678").is_some());
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("motdepasse1"), None);
        assert!(validate_password("court1").is_some());
        assert!(validate_password("seulementlettres").is_some());
        assert!(validate_password("12345678").is_some());
    }

    #[test]
    fn test_registration_form_collects_errors_in_order() {
        let form = RegistrationForm {
            first_name: "Amina".to_string(),
            last_name: "".to_string(),
            email: "amina@example.ma".to_string(),
            phone: "12".to_string(),
            password: "motdepasse1".to_string(),
            confirm_password: "autre".to_string(),
        };
        let errors = form.validate();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::LastName, Field::Phone, Field::ConfirmPassword]);
        assert_eq!(
            RegistrationForm::error_for(&errors, Field::LastName),
            Some("Le nom est requis")
        );
        assert_eq!(RegistrationForm::error_for(&errors, Field::Email), None);
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let form = RegistrationForm {
            first_name: "Amina".to_string(),
            last_name: "Alaoui".to_string(),
            email: "amina@example.ma".to_string(),
            phone: "0612345678".to_string(),
            password: "motdepasse1".to_string(),
            confirm_password: "motdepasse1".to_string(),
        };
        assert!(form.validate().is_empty());
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            first_name: " Youssef ".to_string(),
            last_name: "Benali".to_string(),
            email: "Youssef@Example.ma".to_string(),
            phone: "06 12 34 56 78".to_string(),
            password: "atlas2024".to_string(),
            confirm_password: "atlas2024".to_string(),
        }
    }

    #[test]
    fn test_register_opens_session_for_valid_form() {
        let auth = valid_form()
            .register(UserRole::Professional, Some("Rabat".to_string()))
            .unwrap();
        assert_eq!(auth.user.first_name, "Youssef");
        assert_eq!(auth.user.email, "youssef@example.ma");
        assert_eq!(auth.user.role, UserRole::Professional);
        assert!(!auth.token.is_empty());
    }

    #[test]
    fn test_register_returns_inline_errors() {
        let form = RegistrationForm {
            phone: "0812345678".to_string(),
            confirm_password: "different1".to_string(),
            ..valid_form()
        };
        let errors = form.register(UserRole::Client, None).unwrap_err();
        assert!(RegistrationForm::error_for(&errors, Field::Phone).is_some());
        assert!(RegistrationForm::error_for(&errors, Field::ConfirmPassword).is_some());
        assert_eq!(RegistrationForm::error_for(&errors, Field::Email), None);
    }
}

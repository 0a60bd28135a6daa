//! Mock sign-in: any plausible email plus a non-empty password is accepted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::alert::AlertInfo;
use crate::system::users::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("email and password are required")]
    MissingCredentials,

    #[error("email address is not valid")]
    InvalidEmail,
}

impl LoginError {
    pub fn to_alert(&self) -> AlertInfo {
        match self {
            LoginError::MissingCredentials => AlertInfo::error(
                "Missing Information",
                "Please enter both email and password.",
            ),
            LoginError::InvalidEmail => AlertInfo::error(
                "Login Failed",
                "Please enter a valid email and password.",
            ),
        }
    }
}

/// Display name from the local part of an email, first letter upper-cased.
///
/// `"priya@pharma.in"` becomes `"Priya"`.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Validates the form and builds the session user.
pub fn authenticate(request: &LoginRequest) -> Result<User, LoginError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    if !request.email.contains('@') {
        return Err(LoginError::InvalidEmail);
    }

    Ok(User {
        id: uuid::Uuid::new_v4().to_string(),
        name: display_name_from_email(&request.email),
        email: request.email.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(display_name_from_email("priya@pharma.in"), "Priya");
        assert_eq!(display_name_from_email("admin@pharmiq.com"), "Admin");
        assert_eq!(display_name_from_email("Rahul.k@x.org"), "Rahul.k");
        assert_eq!(display_name_from_email("@nobody"), "");
    }

    #[test]
    fn test_authenticate_accepts_any_email_with_at_sign() {
        let user = authenticate(&request("meera@clinic.example", "x")).unwrap();
        assert_eq!(user.name, "Meera");
        assert_eq!(user.email, "meera@clinic.example");
        assert!(!user.id.is_empty());
    }

    #[test]
    fn test_authenticate_rejects_empty_fields() {
        assert_eq!(
            authenticate(&request("", "secret")),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(
            authenticate(&request("a@b.c", "")),
            Err(LoginError::MissingCredentials)
        );
    }

    #[test]
    fn test_authenticate_rejects_email_without_at_sign() {
        let err = authenticate(&request("not-an-email", "secret")).unwrap_err();
        assert_eq!(err, LoginError::InvalidEmail);
        assert_eq!(err.to_alert().title, "Login Failed");
    }

    #[test]
    fn test_missing_credentials_alert() {
        let alert = LoginError::MissingCredentials.to_alert();
        assert_eq!(alert.title, "Missing Information");
    }
}

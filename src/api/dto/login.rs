//! DTO for login requests.

use serde::Deserialize;
use validator::Validate;

/// Credentials submitted at login.
///
/// Only presence is checked. Password complexity applies when a password is
/// set, not when it is used.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_valid() {
        let login = LoginRequest {
            email: "john.doe@example.com".to_string(),
            password: "Secure*1234".to_string(),
        };
        assert!(login.validate().is_ok());
    }

    #[test]
    fn test_login_weak_password_is_accepted() {
        let login = LoginRequest {
            email: "john.doe@example.com".to_string(),
            password: "abc".to_string(),
        };
        assert!(login.validate().is_ok());
    }

    #[test]
    fn test_login_empty_password() {
        let login = LoginRequest {
            email: "john.doe@example.com".to_string(),
            password: String::new(),
        };
        let errors = login.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}

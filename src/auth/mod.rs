pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username of the account to log into.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Account password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username: 3 to 32 characters, alphanumeric plus underscores
    /// and hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// Password for the new account, at least 6 characters.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Response after successful authentication (login or registration).
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed token for subsequent authenticated requests.
    pub token: String,
    /// Unique identifier of the authenticated user.
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_login_request_validation() {
        let valid_login = LoginRequest {
            username: "test_user".to_string(),
            password: "password123".to_string(),
        };
        assert!(valid_login.validate().is_ok());

        let empty_username = LoginRequest {
            username: "".to_string(),
            password: "password123".to_string(),
        };
        assert!(empty_username.validate().is_err());

        let empty_password = LoginRequest {
            username: "test_user".to_string(),
            password: "".to_string(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let valid_register = RegisterRequest {
            username: "test_user-123".to_string(),
            password: "password123".to_string(),
        };
        assert!(valid_register.validate().is_ok());

        let invalid_username = RegisterRequest {
            username: "test user!".to_string(), // Contains space and exclamation
            password: "password123".to_string(),
        };
        assert!(invalid_username.validate().is_err());

        let short_username = RegisterRequest {
            username: "tu".to_string(),
            password: "password123".to_string(),
        };
        assert!(short_username.validate().is_err());

        let short_password = RegisterRequest {
            username: "test_user".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());
    }
}

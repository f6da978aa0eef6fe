//! Administrator account checks.

use super::MIN_PASSWORD_LENGTH;
use crate::diagnostics::Diagnostics;

const MIN_USERNAME_LENGTH: usize = 3;

/// Substrings that make a password easy to guess. Only the first hit is reported.
const COMMON_PATTERNS: [&str; 6] = ["123", "abc", "qwerty", "admin", "password", "welcome"];

/// Validate administrator credentials entered for the deployment.
pub fn validate_admin_account(username: &str, password: &str) -> Diagnostics {
    let mut result = Diagnostics::new();

    if username.is_empty() {
        result.error("Username cannot be empty");
    } else if username.chars().count() < MIN_USERNAME_LENGTH {
        result.warn(format!(
            "Username should be at least {MIN_USERNAME_LENGTH} characters long"
        ));
    }

    if password.is_empty() {
        result.error("Password cannot be empty");
        return result;
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH as usize {
        result.warn(format!(
            "Password should be at least {MIN_PASSWORD_LENGTH} characters long"
        ));
    }

    let classes = [
        password.chars().any(char::is_uppercase),
        password.chars().any(char::is_lowercase),
        password.chars().any(char::is_numeric),
        password.chars().any(|c| !c.is_alphanumeric()),
    ];
    if classes.iter().filter(|&&present| present).count() < 3 {
        result.warn("Password should contain at least 3 of the following: uppercase letters, lowercase letters, digits, and special characters");
    }

    let lowered = password.to_lowercase();
    if let Some(pattern) = COMMON_PATTERNS.iter().find(|p| lowered.contains(*p)) {
        result.warn(format!("Password contains common pattern: {pattern}"));
    }

    result
}

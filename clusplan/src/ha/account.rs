//! Service account format checks.

use std::sync::OnceLock;

use regex::Regex;

use crate::diagnostics::Diagnostics;

const MIN_USERNAME_LENGTH: usize = 3;

fn domain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("static regex"))
}

/// Validate a service account given as `DOMAIN\user` or `user@domain`.
///
/// Always ends with the two standing least-privilege recommendations, except
/// when the account is empty.
pub fn validate_service_account(account: &str) -> Diagnostics {
    let mut result = Diagnostics::new();

    if account.is_empty() {
        result.error("Service account cannot be empty");
        return result;
    }

    if let Some((domain, username)) = account.split_once('\\') {
        if domain.is_empty() {
            result.error("Domain name cannot be empty");
        }
        check_username(username, &mut result);
    } else if let Some((username, domain)) = account.split_once('@') {
        check_username(username, &mut result);
        if domain.is_empty() {
            result.error("Domain name cannot be empty");
        } else if !domain_pattern().is_match(domain) {
            result.warn("Domain format appears to be invalid");
        }
    } else {
        result.error("Service account should be in domain\\username or username@domain format");
    }

    let lowered = account.to_lowercase();
    if lowered.contains("admin") {
        result.warn("Avoid using 'admin' in service account names for security");
    }
    if lowered.starts_with("administrator") {
        result.warn("Do not use built-in Administrator account for services");
    }

    result.recommend("Ensure service account has the minimum required permissions");
    result.recommend("Consider using a managed service account (MSA) for improved security");
    result
}

fn check_username(username: &str, result: &mut Diagnostics) {
    if username.is_empty() {
        result.error("Username cannot be empty");
    } else if username.chars().count() < MIN_USERNAME_LENGTH {
        result.warn(format!(
            "Username should be at least {MIN_USERNAME_LENGTH} characters long"
        ));
    }
}

//! Email shape validation for the login form.
//!
//! This mirrors a browser `type=email` check: one `@`, a non-empty local
//! part, a dotted domain, no whitespace. Real validation is the server's
//! job; this only catches obvious typos before a round trip.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

/// True if the string looks like an email address.
pub fn is_valid(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

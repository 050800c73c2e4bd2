use super::*;

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid("a@b.com"));
    assert!(is_valid("first.last@sub.domain.co"));
    assert!(is_valid("  padded@mail.org  "));
}

#[test]
fn rejects_missing_parts() {
    assert!(!is_valid(""));
    assert!(!is_valid("no-at-sign.com"));
    assert!(!is_valid("@b.com"));
    assert!(!is_valid("a@"));
    assert!(!is_valid("a@nodot"));
    assert!(!is_valid("a@.com"));
    assert!(!is_valid("a@b."));
}

#[test]
fn rejects_whitespace_and_double_at() {
    assert!(!is_valid("a b@c.com"));
    assert!(!is_valid("a@b@c.com"));
}

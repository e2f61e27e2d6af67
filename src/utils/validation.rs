use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // Deliberately loose: one '@', no whitespace, a dot in the domain.
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap()
});

/// Check whether a string looks like an email address.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

// crates/itunes-meta/src/validators.rs
//! Primitive scalar checks shared by the field rules
//!
//! Each check is a pure predicate. Turning a failed check into a
//! [`Rejection`](crate::Rejection) is the job of the field rules.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static EMAIL: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$")
        .ok()
});

/// Common predicates for metadata values
pub struct Validator;

impl Validator {
    /// Returns true if `value` has at most `limit` characters
    pub fn max_length(value: &str, limit: usize) -> bool {
        value.chars().count() <= limit
    }

    /// Returns true if `value` is non-empty and made only of ASCII letters
    pub fn alphabetic_only(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
    }

    /// Case-sensitive membership test
    pub fn enumerated(value: &str, allowed: &[&str]) -> bool {
        allowed.contains(&value)
    }

    /// Returns true if `value` is an absolute URI with a scheme and a non-empty host
    ///
    /// `Url::parse` silently trims and strips whitespace and control
    /// characters, so those are refused up front; the raw string is what
    /// gets stored.
    pub fn well_formed_absolute_uri(value: &str) -> bool {
        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return false;
        }
        match Url::parse(value) {
            Ok(url) => url.host_str().map_or(false, |host| !host.is_empty()),
            Err(_) => false,
        }
    }

    /// Returns true if the last path segment ends in one of `extensions`
    ///
    /// Comparison ignores ASCII case. Query strings and fragments are not
    /// part of the path.
    pub fn has_supported_extension(value: &str, extensions: &[&str]) -> bool {
        let path = match Url::parse(value) {
            Ok(url) => url.path().to_string(),
            Err(_) => value
                .split(|c: char| c == '?' || c == '#')
                .next()
                .unwrap_or_default()
                .to_string(),
        };

        let segment = path.rsplit('/').next().unwrap_or_default();
        match segment.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
            _ => false,
        }
    }

    /// Returns true if `value` has a single `local@domain` shape
    pub fn well_formed_email(value: &str) -> bool {
        EMAIL.as_ref().map_or(false, |re| re.is_match(value))
    }
}

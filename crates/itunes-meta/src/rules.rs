// crates/itunes-meta/src/rules.rs
//! Per-field validation rules
//!
//! Each rule takes a raw candidate and returns either the normalized value to
//! store or a [`Rejection`]. Rules never touch a record; committing the
//! returned value is up to the caller, which keeps failed calls free of
//! side effects.

use crate::constraints::{
    AUTHOR_MAX_LEN, BLOCK_MAX_LEN, CATEGORY_MAX_LEN, DURATION_MAX_SECONDS,
    DURATION_SEGMENT_MAX_DIGITS, EXPLICIT_TERMS, IMAGE_EXTENSIONS, KEYWORDS_MAX_COUNT,
    KEYWORDS_MAX_JOINED_LEN, KEYWORD_SEPARATOR, OWNER_FIELD_MAX_LEN, SUBTITLE_MAX_LEN,
    SUMMARY_MAX_LEN,
};
use crate::error::{DurationError, Reason, Rejection, RuleResult};
use crate::types::{Category, Duration, Explicit, Field, Owner};
use crate::validators::Validator;

fn bounded(field: Field, value: &str, limit: usize) -> RuleResult<()> {
    if Validator::max_length(value, limit) {
        Ok(())
    } else {
        Err(Rejection::exceeding(
            field,
            Reason::TooLong,
            value,
            value.chars().count(),
            limit,
        ))
    }
}

/// Block flag: ASCII letters only, at most 255 characters
pub fn block(value: &str) -> RuleResult<String> {
    bounded(Field::Block, value, BLOCK_MAX_LEN)?;
    if !Validator::alphabetic_only(value) {
        return Err(Rejection::new(Field::Block, Reason::InvalidCharacters, value));
    }
    Ok(value.to_string())
}

/// A single author name
pub fn author(value: &str) -> RuleResult<String> {
    bounded(Field::Authors, value, AUTHOR_MAX_LEN)?;
    Ok(value.to_string())
}

/// Several author names; fails on the first invalid one
pub fn authors<I, S>(values: I) -> RuleResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values.into_iter().map(|v| author(v.as_ref())).collect()
}

/// Category list; every category and subcategory name is length-checked
pub fn categories(values: Vec<Category>) -> RuleResult<Vec<Category>> {
    for category in &values {
        for name in category.names() {
            bounded(Field::Categories, name, CATEGORY_MAX_LEN)?;
        }
    }
    Ok(values)
}

/// Artwork URL: absolute URI ending in png, jpg or jpeg
pub fn image(value: &str) -> RuleResult<String> {
    if !Validator::well_formed_absolute_uri(value) {
        return Err(Rejection::new(Field::Image, Reason::MalformedUri, value));
    }
    if !Validator::has_supported_extension(value, IMAGE_EXTENSIONS) {
        return Err(Rejection::new(
            Field::Image,
            Reason::UnsupportedExtension,
            value,
        ));
    }
    Ok(value.to_string())
}

/// Duration as seconds or a `SS` / `MM:SS` / `HH:MM:SS` clock string
pub fn duration(value: Duration) -> RuleResult<Duration> {
    if let Duration::Clock(ref clock) = value {
        check_clock(clock).map_err(|e| {
            Rejection::new(Field::Duration, Reason::MalformedDuration(e), clock)
        })?;
    }
    Ok(value)
}

// Digit width is checked per segment; "7:5" passes, "7:005" does not.
fn check_clock(clock: &str) -> Result<(), DurationError> {
    let parts: Vec<&str> = clock.split(':').collect();
    let numeric = |p: &&str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if parts.len() > 3 || !parts.iter().all(numeric) {
        return Err(DurationError::UnknownFormat);
    }

    let mut segments = parts.iter().rev();
    let seconds = match (segments.next(), parts.len()) {
        (Some(seconds), n) if n > 1 => seconds,
        _ => return Ok(()),
    };
    let seconds_ok = seconds.len() <= DURATION_SEGMENT_MAX_DIGITS
        && seconds
            .parse::<u8>()
            .map_or(false, |s| s <= DURATION_MAX_SECONDS);
    if !seconds_ok {
        return Err(DurationError::SecondsOutOfRange);
    }

    // Minutes are limited by width only; "1:75:00" is accepted.
    match segments.next() {
        Some(minutes) if minutes.len() > DURATION_SEGMENT_MAX_DIGITS => {
            Err(DurationError::MinutesDigitWidth)
        }
        _ => Ok(()),
    }
}

/// Explicit rating: one of `yes`, `no`, `clean`
pub fn explicit(value: &str) -> RuleResult<Explicit> {
    match Explicit::from_term(value) {
        Some(rating) if Validator::enumerated(value, EXPLICIT_TERMS) => Ok(rating),
        _ => Err(Rejection::new(Field::Explicit, Reason::NotInAllowedSet, value)),
    }
}

/// Keyword list: at most 12 entries, comma-joined length at most 255
pub fn keywords<I, S>(values: I) -> RuleResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let words: Vec<String> = values.into_iter().map(Into::into).collect();
    let joined = words.join(KEYWORD_SEPARATOR);

    if words.len() > KEYWORDS_MAX_COUNT {
        return Err(Rejection::exceeding(
            Field::Keywords,
            Reason::TooManyElements,
            &joined,
            words.len(),
            KEYWORDS_MAX_COUNT,
        ));
    }

    let joined_len = joined.chars().count();
    if joined_len > KEYWORDS_MAX_JOINED_LEN {
        return Err(Rejection::exceeding(
            Field::Keywords,
            Reason::JoinedLengthExceeded,
            &joined,
            joined_len,
            KEYWORDS_MAX_JOINED_LEN,
        ));
    }

    Ok(words)
}

/// Redirect target for a moved feed
pub fn new_feed_url(value: &str) -> RuleResult<String> {
    if !Validator::well_formed_absolute_uri(value) {
        return Err(Rejection::new(Field::NewFeedUrl, Reason::MalformedUri, value));
    }
    Ok(value.to_string())
}

/// Owner contact record
pub fn owner(value: Owner) -> RuleResult<Owner> {
    bounded(Field::Owners, &value.name, OWNER_FIELD_MAX_LEN)?;
    bounded(Field::Owners, &value.email, OWNER_FIELD_MAX_LEN)?;
    if !Validator::well_formed_email(&value.email) {
        return Err(Rejection::new(
            Field::Owners,
            Reason::MalformedEmail,
            &value.email,
        ));
    }
    Ok(value)
}

/// Several owner records; fails on the first invalid one
pub fn owners<I>(values: I) -> RuleResult<Vec<Owner>>
where
    I: IntoIterator<Item = Owner>,
{
    values.into_iter().map(owner).collect()
}

pub fn subtitle(value: &str) -> RuleResult<String> {
    bounded(Field::Subtitle, value, SUBTITLE_MAX_LEN)?;
    Ok(value.to_string())
}

pub fn summary(value: &str) -> RuleResult<String> {
    bounded(Field::Summary, value, SUMMARY_MAX_LEN)?;
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duration_error(clock: &str) -> Option<DurationError> {
        match duration(Duration::from(clock)) {
            Err(Rejection {
                reason: Reason::MalformedDuration(e),
                ..
            }) => Some(e),
            _ => None,
        }
    }

    #[test]
    fn test_block_checks_length_before_characters() {
        let err = block(&"1".repeat(256)).unwrap_err();
        assert_eq!(err.reason, Reason::TooLong);
        assert_eq!(err.limit, Some(255));

        let err = block("123").unwrap_err();
        assert_eq!(err.reason, Reason::InvalidCharacters);
    }

    #[test]
    fn test_block_accepts_letters() {
        assert_eq!(block("yes").unwrap(), "yes");
        assert!(block(&"a".repeat(255)).is_ok());
    }

    #[test]
    fn test_authors_fail_as_a_whole() {
        let long = "a".repeat(256);
        let err = authors(["joe", long.as_str(), "jane"]).unwrap_err();
        assert_eq!(err.field, Field::Authors);
        assert_eq!(err.length, 256);
    }

    #[test]
    fn test_categories_check_subcategories() {
        let cats = vec![
            Category::new("cat1"),
            Category::with_subcategories("cat2", ["cat2-1".to_string(), "a".repeat(256)]),
        ];
        let err = categories(cats).unwrap_err();
        assert_eq!(err.reason, Reason::TooLong);
        assert_eq!(err.field, Field::Categories);
    }

    #[test]
    fn test_categories_check_bare_names() {
        let err = categories(vec![Category::new("c".repeat(256))]).unwrap_err();
        assert_eq!(err.reason, Reason::TooLong);
    }

    #[test]
    fn test_image_rules() {
        assert!(image("http://www.example.com/image.png").is_ok());
        assert_eq!(
            image("http://").unwrap_err().reason,
            Reason::MalformedUri
        );
        assert_eq!(
            image("http://www.example.com/image.gif").unwrap_err().reason,
            Reason::UnsupportedExtension
        );
        assert_eq!(
            image(" http://www.example.com/image.png").unwrap_err().reason,
            Reason::MalformedUri
        );
        assert_eq!(
            new_feed_url("http://example.com/feed\n").unwrap_err().reason,
            Reason::MalformedUri
        );
    }

    #[test]
    fn test_duration_accepts_clock_forms() {
        assert!(duration(Duration::from(23u32)).is_ok());
        assert!(duration(Duration::from("23")).is_ok());
        assert!(duration(Duration::from("23:23")).is_ok());
        assert!(duration(Duration::from("23:23:23")).is_ok());
        assert!(duration(Duration::from("1:05")).is_ok());
        assert!(duration(Duration::from("0:0:0")).is_ok());
        assert!(duration(Duration::from("100:00:59")).is_ok());
    }

    #[test]
    fn test_duration_unknown_format() {
        assert_eq!(duration_error("abc"), Some(DurationError::UnknownFormat));
        assert_eq!(duration_error(""), Some(DurationError::UnknownFormat));
        assert_eq!(duration_error("1:2:3:4"), Some(DurationError::UnknownFormat));
        assert_eq!(duration_error("12:"), Some(DurationError::UnknownFormat));
        assert_eq!(duration_error("-1:00"), Some(DurationError::UnknownFormat));
        assert_eq!(duration_error("1:a0"), Some(DurationError::UnknownFormat));
    }

    #[test]
    fn test_duration_seconds_segment() {
        assert_eq!(duration_error("23:456"), Some(DurationError::SecondsOutOfRange));
        assert_eq!(duration_error("23:60"), Some(DurationError::SecondsOutOfRange));
        assert_eq!(duration_error("1:00:059"), Some(DurationError::SecondsOutOfRange));
    }

    #[test]
    fn test_duration_minutes_segment() {
        assert_eq!(duration_error("23:234:45"), Some(DurationError::MinutesDigitWidth));
        assert_eq!(duration_error("234:45"), Some(DurationError::MinutesDigitWidth));
        assert_eq!(duration_error("1:005:00"), Some(DurationError::MinutesDigitWidth));
        assert!(duration(Duration::from("1:75:00")).is_ok());
    }

    #[test]
    fn test_explicit_terms() {
        assert_eq!(explicit("clean").unwrap(), Explicit::Clean);
        assert_eq!(explicit("YES").unwrap_err().reason, Reason::NotInAllowedSet);
    }

    #[test]
    fn test_keyword_limits() {
        let twelve: Vec<String> = (1..=12).map(|i| format!("a{}", i)).collect();
        assert_eq!(keywords(twelve.clone()).unwrap(), twelve);

        let thirteen: Vec<String> = (1..=13).map(|i| format!("a{}", i)).collect();
        let err = keywords(thirteen).unwrap_err();
        assert_eq!(err.reason, Reason::TooManyElements);
        assert_eq!((err.length, err.limit), (13, Some(12)));

        let err = keywords(["a".repeat(253), "bb".to_string()]).unwrap_err();
        assert_eq!(err.reason, Reason::JoinedLengthExceeded);
        assert_eq!((err.length, err.limit), (256, Some(255)));

        assert!(keywords(["a".repeat(252), "bb".to_string()]).is_ok());
    }

    #[test]
    fn test_owner_rules() {
        assert!(owner(Owner::new("joe", "joe@example.com")).is_ok());
        assert_eq!(
            owner(Owner::new("joe", "not-an-email")).unwrap_err().reason,
            Reason::MalformedEmail
        );
        assert_eq!(
            owner(Owner::new("j".repeat(256), "joe@example.com"))
                .unwrap_err()
                .reason,
            Reason::TooLong
        );
    }

    #[test]
    fn test_text_limits() {
        assert!(subtitle(&"a".repeat(255)).is_ok());
        assert_eq!(subtitle(&"a".repeat(256)).unwrap_err().reason, Reason::TooLong);
        assert!(summary(&"a".repeat(4000)).is_ok());
        assert_eq!(summary(&"a".repeat(4001)).unwrap_err().limit, Some(4000));
    }
}

// crates/itunes-meta/src/constraints.rs
//! Fixed per-field limits of the iTunes podcast extension

use crate::types::Field;

/// Maximum characters for the block flag
pub const BLOCK_MAX_LEN: usize = 255;

/// Maximum characters for a single author
pub const AUTHOR_MAX_LEN: usize = 255;

/// Maximum characters for a category or subcategory name
pub const CATEGORY_MAX_LEN: usize = 255;

/// Image extensions accepted for artwork (compared case-insensitively)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Terms accepted for the explicit rating
pub const EXPLICIT_TERMS: &[&str] = &["yes", "no", "clean"];

/// Maximum number of keywords
pub const KEYWORDS_MAX_COUNT: usize = 12;

/// Maximum characters of the joined keyword list
pub const KEYWORDS_MAX_JOINED_LEN: usize = 255;

/// Separator used when measuring the joined keyword list
pub const KEYWORD_SEPARATOR: &str = ",";

/// Maximum characters for an owner name or email
pub const OWNER_FIELD_MAX_LEN: usize = 255;

/// Maximum characters for the subtitle
pub const SUBTITLE_MAX_LEN: usize = 255;

/// Maximum characters for the summary
pub const SUMMARY_MAX_LEN: usize = 4000;

/// Widest allowed minutes or seconds segment of a clock duration
pub const DURATION_SEGMENT_MAX_DIGITS: usize = 2;

/// Largest allowed seconds value of a clock duration
pub const DURATION_MAX_SECONDS: u8 = 59;

/// Constraint summary for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    /// Character limit on a single value
    pub max_length: Option<usize>,
    /// Limit on the number of elements of a sequence field
    pub max_count: Option<usize>,
    /// Limit on the joined representation of a sequence field
    pub max_joined_length: Option<usize>,
    /// Enumerated values or extensions the field accepts
    pub allowed: &'static [&'static str],
}

impl Constraint {
    const NONE: Self = Self {
        max_length: None,
        max_count: None,
        max_joined_length: None,
        allowed: &[],
    };

    const fn length(limit: usize) -> Self {
        Self {
            max_length: Some(limit),
            ..Self::NONE
        }
    }

    /// Looks up the constraint table entry for `field`
    pub const fn of(field: Field) -> Self {
        match field {
            Field::Block => Self::length(BLOCK_MAX_LEN),
            Field::Authors => Self::length(AUTHOR_MAX_LEN),
            Field::Categories => Self::length(CATEGORY_MAX_LEN),
            Field::Image => Self {
                allowed: IMAGE_EXTENSIONS,
                ..Self::NONE
            },
            Field::Duration => Self::NONE,
            Field::Explicit => Self {
                allowed: EXPLICIT_TERMS,
                ..Self::NONE
            },
            Field::Keywords => Self {
                max_count: Some(KEYWORDS_MAX_COUNT),
                max_joined_length: Some(KEYWORDS_MAX_JOINED_LEN),
                ..Self::NONE
            },
            Field::NewFeedUrl => Self::NONE,
            Field::Owners => Self::length(OWNER_FIELD_MAX_LEN),
            Field::Subtitle => Self::length(SUBTITLE_MAX_LEN),
            Field::Summary => Self::length(SUMMARY_MAX_LEN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_limits() {
        assert_eq!(Constraint::of(Field::Subtitle).max_length, Some(255));
        assert_eq!(Constraint::of(Field::Summary).max_length, Some(4000));
        assert_eq!(Constraint::of(Field::Block).max_length, Some(255));
    }

    #[test]
    fn test_keyword_limits() {
        let keywords = Constraint::of(Field::Keywords);
        assert_eq!(keywords.max_count, Some(12));
        assert_eq!(keywords.max_joined_length, Some(255));
        assert_eq!(keywords.max_length, None);
    }

    #[test]
    fn test_enumerations() {
        assert_eq!(Constraint::of(Field::Explicit).allowed, &["yes", "no", "clean"]);
        assert!(Constraint::of(Field::Image).allowed.contains(&"jpeg"));
        assert!(Constraint::of(Field::Duration).allowed.is_empty());
    }
}

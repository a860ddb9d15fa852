// crates/itunes-meta/src/error.rs
//! Rejection taxonomy for metadata field rules
//!
//! Every failed `set_*`/`add_*` call produces exactly one [`Rejection`]. The
//! reason tags form a closed set; which tags a given field may raise is
//! answered by [`Field::permits`](crate::Field::permits).

use crate::types::Field;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for field rule operations
pub type RuleResult<T> = Result<T, Rejection>;

/// Offending values longer than this are truncated inside a rejection
pub const MAX_REPORTED_CHARS: usize = 64;

/// Why a duration string could not be accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationError {
    /// Not `SS`, `MM:SS` or `HH:MM:SS` made of digits
    UnknownFormat,
    /// Seconds segment is wider than two digits or above 59
    SecondsOutOfRange,
    /// Minutes segment is wider than two digits
    MinutesDigitWidth,
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFormat => write!(f, "unknown duration format"),
            Self::SecondsOutOfRange => write!(f, "seconds must be 0-59 with at most two digits"),
            Self::MinutesDigitWidth => write!(f, "minutes must have at most two digits"),
        }
    }
}

/// Failure reason tag carried by a [`Rejection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    /// Value exceeds the field's character limit
    TooLong,
    /// Value contains characters outside the allowed class
    InvalidCharacters,
    /// Value is not one of the enumerated terms
    NotInAllowedSet,
    /// Value is not an absolute URI with a host
    MalformedUri,
    /// URI path does not end in an accepted file extension
    UnsupportedExtension,
    /// Duration could not be parsed
    MalformedDuration(DurationError),
    /// Sequence holds more elements than allowed
    TooManyElements,
    /// Joined representation of a sequence is too long
    JoinedLengthExceeded,
    /// Contact address is not `local@domain`
    MalformedEmail,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(f, "value too long"),
            Self::InvalidCharacters => write!(f, "value must contain only ASCII letters"),
            Self::NotInAllowedSet => write!(f, "value is not an allowed term"),
            Self::MalformedUri => write!(f, "value is not a valid absolute URI"),
            Self::UnsupportedExtension => write!(f, "unsupported file extension"),
            Self::MalformedDuration(inner) => write!(f, "invalid duration: {}", inner),
            Self::TooManyElements => write!(f, "too many elements"),
            Self::JoinedLengthExceeded => write!(f, "joined value too long"),
            Self::MalformedEmail => write!(f, "value is not a valid email address"),
        }
    }
}

/// A refused candidate value
///
/// `length` is the character count (or element count, for
/// [`Reason::TooManyElements`]) of the original input, so it stays accurate
/// even when `value` has been truncated.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field} rejected: {reason}{}", context(.value, .length, .limit))]
pub struct Rejection {
    /// Field the candidate was submitted for
    pub field: Field,
    /// Failure reason
    pub reason: Reason,
    /// Offending input, truncated to [`MAX_REPORTED_CHARS`]
    pub value: String,
    /// Size of the offending input
    pub length: usize,
    /// The violated limit, when the reason has one
    pub limit: Option<usize>,
}

impl Rejection {
    /// Creates a rejection with no numeric limit
    pub fn new(field: Field, reason: Reason, value: &str) -> Self {
        Self {
            field,
            reason,
            value: truncate(value),
            length: value.chars().count(),
            limit: None,
        }
    }

    /// Creates a rejection for a size that went over `limit`
    pub fn exceeding(field: Field, reason: Reason, value: &str, length: usize, limit: usize) -> Self {
        Self {
            field,
            reason,
            value: truncate(value),
            length,
            limit: Some(limit),
        }
    }

    /// Returns true if the reported value was shortened
    pub fn is_truncated(&self) -> bool {
        self.value.chars().count() > MAX_REPORTED_CHARS
    }
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_REPORTED_CHARS {
        value.to_string()
    } else {
        let mut short: String = value.chars().take(MAX_REPORTED_CHARS).collect();
        short.push_str("...");
        short
    }
}

fn context(value: &str, length: &usize, limit: &Option<usize>) -> String {
    match limit {
        Some(limit) => format!(" (got {}, limit {})", length, limit),
        None => format!(" (got: {})", value),
    }
}

// crates/itunes-meta/src/types.rs
//! Value types stored in metadata records

use crate::error::Reason;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The iTunes metadata fields accepted by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Block,
    Authors,
    Categories,
    Image,
    Duration,
    Explicit,
    Keywords,
    NewFeedUrl,
    Owners,
    Subtitle,
    Summary,
}

impl Field {
    /// Every field, in element emission order
    pub const ALL: [Field; 11] = [
        Field::Block,
        Field::Authors,
        Field::Categories,
        Field::Image,
        Field::Duration,
        Field::Explicit,
        Field::Keywords,
        Field::NewFeedUrl,
        Field::Owners,
        Field::Subtitle,
        Field::Summary,
    ];

    /// Stable lowercase name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Authors => "author",
            Self::Categories => "category",
            Self::Image => "image",
            Self::Duration => "duration",
            Self::Explicit => "explicit",
            Self::Keywords => "keywords",
            Self::NewFeedUrl => "new-feed-url",
            Self::Owners => "owner",
            Self::Subtitle => "subtitle",
            Self::Summary => "summary",
        }
    }

    /// Returns true if episodes (feed entries) may carry this field
    pub fn is_entry_level(&self) -> bool {
        matches!(
            self,
            Self::Block
                | Self::Authors
                | Self::Duration
                | Self::Explicit
                | Self::Keywords
                | Self::Subtitle
                | Self::Summary
        )
    }

    /// Returns true if `reason` belongs to the set this field's rule may raise
    pub fn permits(&self, reason: Reason) -> bool {
        match self {
            Self::Block => matches!(reason, Reason::TooLong | Reason::InvalidCharacters),
            Self::Authors | Self::Categories | Self::Subtitle | Self::Summary => {
                reason == Reason::TooLong
            }
            Self::Image => matches!(
                reason,
                Reason::MalformedUri | Reason::UnsupportedExtension
            ),
            Self::Duration => matches!(reason, Reason::MalformedDuration(_)),
            Self::Explicit => reason == Reason::NotInAllowedSet,
            Self::Keywords => matches!(
                reason,
                Reason::TooManyElements | Reason::JoinedLengthExceeded
            ),
            Self::NewFeedUrl => reason == Reason::MalformedUri,
            Self::Owners => matches!(reason, Reason::TooLong | Reason::MalformedEmail),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Episode or show length
///
/// Either a raw second count or a clock string (`SS`, `MM:SS`, `HH:MM:SS`).
/// The form supplied by the caller is the form stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Duration {
    Seconds(u64),
    Clock(String),
}

impl From<u64> for Duration {
    fn from(seconds: u64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<u32> for Duration {
    fn from(seconds: u32) -> Self {
        Self::Seconds(u64::from(seconds))
    }
}

impl From<&str> for Duration {
    fn from(clock: &str) -> Self {
        Self::Clock(clock.to_string())
    }
}

impl From<String> for Duration {
    fn from(clock: String) -> Self {
        Self::Clock(clock)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(seconds) => write!(f, "{}", seconds),
            Self::Clock(clock) => write!(f, "{}", clock),
        }
    }
}

/// Explicit-content rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Explicit {
    Yes,
    No,
    Clean,
}

impl Explicit {
    /// Matches an exact (case-sensitive) rating term
    pub fn from_term(term: &str) -> Option<Self> {
        match term {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "clean" => Some(Self::Clean),
            _ => None,
        }
    }

    /// Returns the term as it appears in the feed
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Clean => "clean",
        }
    }
}

impl fmt::Display for Explicit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directory category, optionally with subcategories
///
/// `subcategories: None` (a bare category) and `Some(vec![])` are kept apart
/// so the caller's input round-trips exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub subcategories: Option<Vec<String>>,
}

impl Category {
    /// Creates a bare category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subcategories: None,
        }
    }

    /// Creates a category with subcategories
    pub fn with_subcategories<I, S>(name: impl Into<String>, subcategories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            subcategories: Some(subcategories.into_iter().map(Into::into).collect()),
        }
    }

    /// Iterates over the category name followed by every subcategory name
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.subcategories.iter().flatten().map(String::as_str))
    }
}

/// Podcast owner contact record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub email: String,
}

impl Owner {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A validated value read back from a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Block flag
    Flag(&'a str),
    /// Free text (subtitle, summary)
    Text(&'a str),
    /// Absolute URI (image, new feed URL)
    Uri(&'a str),
    /// Ordered strings (authors, keywords)
    List(&'a [String]),
    Categories(&'a [Category]),
    Duration(&'a Duration),
    Explicit(Explicit),
    Owners(&'a [Owner]),
}

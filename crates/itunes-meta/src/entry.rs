// crates/itunes-meta/src/entry.rs
//! Episode-level iTunes metadata

use crate::error::RuleResult;
use crate::record::{entry_level_accessors, logged};
use crate::rules;
use crate::types::{Duration, Explicit, Field, FieldValue};
use serde::Serialize;

/// Validated iTunes metadata for a single episode
///
/// Carries the subset of fields an episode may override; see
/// [`Field::is_entry_level`]. Same commit rules as
/// [`ItunesMetadata`](crate::ItunesMetadata).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    block: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explicit: Option<Explicit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

impl EntryMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.value(*field).is_none())
    }

    /// Generic read; feed-only fields are always `None`
    pub fn value(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Block => self.block().map(FieldValue::Flag),
            Field::Authors => self.authors().map(FieldValue::List),
            Field::Duration => self.duration().map(FieldValue::Duration),
            Field::Explicit => self.explicit().map(FieldValue::Explicit),
            Field::Keywords => self.keywords().map(FieldValue::List),
            Field::Subtitle => self.subtitle().map(FieldValue::Text),
            Field::Summary => self.summary().map(FieldValue::Text),
            Field::Categories | Field::Image | Field::NewFeedUrl | Field::Owners => None,
        }
    }

    entry_level_accessors!();
}

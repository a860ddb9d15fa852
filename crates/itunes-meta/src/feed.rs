// crates/itunes-meta/src/feed.rs
//! Feed and entry holders carrying optional iTunes metadata

use crate::entry::EntryMetadata;
use crate::record::ItunesMetadata;
use serde::Serialize;

/// A feed under construction
///
/// Rendering is left to the serializer, which reads `itunes` through the
/// record accessors and skips it entirely when it is `None`.
#[derive(Debug, Clone, Serialize)]
pub struct Feed {
    /// Feed title
    pub title: String,
    /// Feed description
    pub description: Option<String>,
    /// Feed URL
    pub url: Option<String>,
    /// Feed language
    pub language: Option<String>,
    /// Feed entries/episodes
    pub entries: Vec<FeedEntry>,
    /// Podcast metadata, if any was set
    pub itunes: Option<ItunesMetadata>,
}

impl Feed {
    /// Creates a new feed
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            url: None,
            language: None,
            entries: Vec::new(),
            itunes: None,
        }
    }

    /// Returns the number of entries in the feed
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the feed has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds an entry to the feed
    pub fn add_entry(&mut self, entry: FeedEntry) {
        self.entries.push(entry);
    }

    /// Returns the podcast metadata if it was ever touched
    pub fn itunes(&self) -> Option<&ItunesMetadata> {
        self.itunes.as_ref()
    }

    /// Returns the podcast metadata, creating an empty record on first use
    pub fn itunes_mut(&mut self) -> &mut ItunesMetadata {
        self.itunes.get_or_insert_with(ItunesMetadata::new)
    }

    /// Entries that carry any episode-level metadata
    pub fn podcast_entries(&self) -> Vec<&FeedEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.itunes().map_or(false, |meta| !meta.is_empty()))
            .collect()
    }
}

/// A single entry in a feed
#[derive(Debug, Clone, Serialize)]
pub struct FeedEntry {
    /// Entry title
    pub title: String,
    /// Entry description
    pub description: Option<String>,
    /// Entry URL/link
    pub url: Option<String>,
    /// Unique identifier (GUID)
    pub guid: Option<String>,
    /// Episode metadata, if any was set
    pub itunes: Option<EntryMetadata>,
}

impl FeedEntry {
    /// Creates a new entry
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            url: None,
            guid: None,
            itunes: None,
        }
    }

    pub fn itunes(&self) -> Option<&EntryMetadata> {
        self.itunes.as_ref()
    }

    pub fn itunes_mut(&mut self) -> &mut EntryMetadata {
        self.itunes.get_or_insert_with(EntryMetadata::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_creation() {
        let feed = Feed::new("Test Feed");
        assert_eq!(feed.title, "Test Feed");
        assert!(feed.is_empty());
        assert!(feed.itunes().is_none());
    }

    #[test]
    fn test_feed_add_entry() {
        let mut feed = Feed::new("Test");
        feed.add_entry(FeedEntry::new("Entry 1"));
        feed.add_entry(FeedEntry::new("Entry 2"));

        assert_eq!(feed.entry_count(), 2);
        assert!(!feed.is_empty());
    }

    #[test]
    fn test_itunes_created_on_first_use() {
        let mut feed = Feed::new("Test");
        feed.itunes_mut().set_subtitle("abc").unwrap();

        let meta = feed.itunes().expect("record should exist");
        assert_eq!(meta.subtitle(), Some("abc"));
    }

    #[test]
    fn test_rejected_value_on_fresh_feed() {
        let mut feed = Feed::new("Test");
        assert!(feed.itunes_mut().set_explicit("maybe").is_err());

        // The record exists but holds nothing
        assert!(feed.itunes().map_or(false, ItunesMetadata::is_empty));
    }

    #[test]
    fn test_podcast_entries_filter() {
        let mut feed = Feed::new("Test");

        let mut episode = FeedEntry::new("Episode 1");
        episode.itunes_mut().set_duration(1800u32).unwrap();

        feed.add_entry(episode);
        feed.add_entry(FeedEntry::new("Text Item"));

        let podcast_entries = feed.podcast_entries();
        assert_eq!(podcast_entries.len(), 1);
        assert_eq!(podcast_entries[0].title, "Episode 1");
    }
}

// crates/itunes-meta/src/lib.rs
//! iTunes podcast metadata validation for outgoing feeds
//!
//! This crate checks and stores the podcast extension fields of a feed
//! before it is written out:
//! - block flag, subtitle and summary
//! - author lists and owner contact records
//! - category/subcategory taxonomy
//! - artwork and new-feed URLs
//! - episode/show duration, explicit rating and keywords
//!
//! Every setter either stores a fully validated value or returns a
//! [`Rejection`] and leaves the record untouched.
//!
//! # Example
//!
//! ```rust
//! use storystream_itunes_meta::{Feed, Owner, Reason};
//!
//! let mut feed = Feed::new("My Podcast");
//! let itunes = feed.itunes_mut();
//!
//! itunes.add_authors(["joe", "jane"]).expect("valid authors");
//! itunes.set_duration("23:23").expect("valid duration");
//! itunes
//!     .add_owner(Owner::new("joe", "joe@example.com"))
//!     .expect("valid owner");
//!
//! let err = itunes.set_explicit("maybe").unwrap_err();
//! assert_eq!(err.reason, Reason::NotInAllowedSet);
//! assert!(itunes.explicit().is_none());
//! ```

pub mod constraints;
mod entry;
mod error;
mod feed;
mod record;
pub mod rules;
mod types;
mod validators;

pub use constraints::Constraint;
pub use entry::EntryMetadata;
pub use error::{DurationError, Reason, Rejection, RuleResult, MAX_REPORTED_CHARS};
pub use feed::{Feed, FeedEntry};
pub use record::ItunesMetadata;
pub use types::{Category, Duration, Explicit, Field, FieldValue, Owner};
pub use validators::Validator;

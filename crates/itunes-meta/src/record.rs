// crates/itunes-meta/src/record.rs
//! Feed-level iTunes metadata record

use crate::error::RuleResult;
use crate::rules;
use crate::types::{Category, Duration, Explicit, Field, FieldValue, Owner};
use serde::Serialize;

/// Logs the outcome of a rule before it is committed or returned
pub(crate) fn logged<T>(field: Field, outcome: RuleResult<T>) -> RuleResult<T> {
    match &outcome {
        Ok(_) => log::debug!("Accepted itunes:{}", field),
        Err(rejection) => log::debug!("{}", rejection),
    }
    outcome
}

/// Accessors for the fields both feed and episode records carry
///
/// Expands inside an `impl` whose struct has `block`, `authors`, `duration`,
/// `explicit`, `keywords`, `subtitle` and `summary` fields, so the two records
/// share one definition of each setter and getter.
macro_rules! entry_level_accessors {
    () => {
        pub fn set_block(&mut self, value: &str) -> RuleResult<()> {
            self.block = Some(logged(Field::Block, rules::block(value))?);
            Ok(())
        }

        pub fn block(&self) -> Option<&str> {
            self.block.as_deref()
        }

        /// Appends one author
        pub fn add_author(&mut self, value: &str) -> RuleResult<()> {
            let author = logged(Field::Authors, rules::author(value))?;
            self.authors.push(author);
            Ok(())
        }

        /// Appends several authors, or none if any is invalid
        pub fn add_authors<I, S>(&mut self, values: I) -> RuleResult<()>
        where
            I: IntoIterator<Item = S>,
            S: AsRef<str>,
        {
            let authors = logged(Field::Authors, rules::authors(values))?;
            self.authors.extend(authors);
            Ok(())
        }

        pub fn authors(&self) -> Option<&[String]> {
            if self.authors.is_empty() {
                None
            } else {
                Some(&self.authors)
            }
        }

        /// Sets the duration from seconds (`23`) or a clock string (`"23:23"`)
        pub fn set_duration(&mut self, value: impl Into<Duration>) -> RuleResult<()> {
            self.duration = Some(logged(Field::Duration, rules::duration(value.into()))?);
            Ok(())
        }

        pub fn duration(&self) -> Option<&Duration> {
            self.duration.as_ref()
        }

        pub fn set_explicit(&mut self, value: &str) -> RuleResult<()> {
            self.explicit = Some(logged(Field::Explicit, rules::explicit(value))?);
            Ok(())
        }

        pub fn explicit(&self) -> Option<Explicit> {
            self.explicit
        }

        /// Replaces the keyword list
        pub fn set_keywords<I, S>(&mut self, values: I) -> RuleResult<()>
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.keywords = Some(logged(Field::Keywords, rules::keywords(values))?);
            Ok(())
        }

        pub fn keywords(&self) -> Option<&[String]> {
            self.keywords.as_deref()
        }

        pub fn set_subtitle(&mut self, value: &str) -> RuleResult<()> {
            self.subtitle = Some(logged(Field::Subtitle, rules::subtitle(value))?);
            Ok(())
        }

        pub fn subtitle(&self) -> Option<&str> {
            self.subtitle.as_deref()
        }

        pub fn set_summary(&mut self, value: &str) -> RuleResult<()> {
            self.summary = Some(logged(Field::Summary, rules::summary(value))?);
            Ok(())
        }

        pub fn summary(&self) -> Option<&str> {
            self.summary.as_deref()
        }
    };
}

pub(crate) use entry_level_accessors;

/// Validated iTunes metadata for a whole feed
///
/// Fields start unset. Every setter runs the matching rule first and only
/// writes when it passes, so a rejected call leaves the record exactly as it
/// was. `add_*` calls on list fields commit all new elements or none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItunesMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    block: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<Category>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explicit: Option<Explicit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_feed_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    owners: Vec<Owner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

impl ItunesMetadata {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field has been set
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.value(*field).is_none())
    }

    /// Reads any field through the generic value view
    pub fn value(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Block => self.block().map(FieldValue::Flag),
            Field::Authors => self.authors().map(FieldValue::List),
            Field::Categories => self.categories().map(FieldValue::Categories),
            Field::Image => self.image().map(FieldValue::Uri),
            Field::Duration => self.duration().map(FieldValue::Duration),
            Field::Explicit => self.explicit().map(FieldValue::Explicit),
            Field::Keywords => self.keywords().map(FieldValue::List),
            Field::NewFeedUrl => self.new_feed_url().map(FieldValue::Uri),
            Field::Owners => self.owners().map(FieldValue::Owners),
            Field::Subtitle => self.subtitle().map(FieldValue::Text),
            Field::Summary => self.summary().map(FieldValue::Text),
        }
    }

    entry_level_accessors!();

    // ===== Categories =====

    /// Replaces the category list
    pub fn set_categories<I>(&mut self, values: I) -> RuleResult<()>
    where
        I: IntoIterator<Item = Category>,
    {
        let categories = rules::categories(values.into_iter().collect());
        self.categories = Some(logged(Field::Categories, categories)?);
        Ok(())
    }

    pub fn categories(&self) -> Option<&[Category]> {
        self.categories.as_deref()
    }

    // ===== Image =====

    pub fn set_image(&mut self, value: &str) -> RuleResult<()> {
        self.image = Some(logged(Field::Image, rules::image(value))?);
        Ok(())
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    // ===== New feed URL =====

    pub fn set_new_feed_url(&mut self, value: &str) -> RuleResult<()> {
        self.new_feed_url = Some(logged(Field::NewFeedUrl, rules::new_feed_url(value))?);
        Ok(())
    }

    pub fn new_feed_url(&self) -> Option<&str> {
        self.new_feed_url.as_deref()
    }

    // ===== Owners =====

    pub fn add_owner(&mut self, value: Owner) -> RuleResult<()> {
        let owner = logged(Field::Owners, rules::owner(value))?;
        self.owners.push(owner);
        Ok(())
    }

    /// Appends several owners, or none if any is invalid
    pub fn add_owners<I>(&mut self, values: I) -> RuleResult<()>
    where
        I: IntoIterator<Item = Owner>,
    {
        let owners = logged(Field::Owners, rules::owners(values))?;
        self.owners.extend(owners);
        Ok(())
    }

    pub fn owners(&self) -> Option<&[Owner]> {
        if self.owners.is_empty() {
            None
        } else {
            Some(&self.owners)
        }
    }
}

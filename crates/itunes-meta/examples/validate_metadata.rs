// crates/itunes-meta/examples/validate_metadata.rs
//! Example of validating podcast metadata before a feed is written
//!
//! Run with `RUST_LOG=debug` to see every accepted and rejected field.

use storystream_itunes_meta::{Category, Feed, FeedEntry, Field, Owner};

fn main() {
    env_logger::init();

    println!("=== StoryStream iTunes Metadata Demo ===\n");

    // Example 1: Valid feed metadata
    println!("Example 1: Feed Metadata");
    println!("{}", "=".repeat(60));
    let feed = build_feed();
    print_feed(&feed);

    println!("\n");

    // Example 2: Rejected values
    println!("Example 2: Rejections");
    println!("{}", "=".repeat(60));
    rejection_example();
}

fn build_feed() -> Feed {
    let mut feed = Feed::new("Classic Audiobooks");
    feed.description = Some("Public domain audiobooks read by volunteers".to_string());

    let itunes = feed.itunes_mut();
    let results = [
        itunes.add_authors(["Jane Austen", "Herman Melville"]),
        itunes.set_categories(vec![
            Category::new("Fiction"),
            Category::with_subcategories("Arts", ["Books"]),
        ]),
        itunes.set_image("https://example.com/audiobooks/cover.jpg"),
        itunes.set_explicit("clean"),
        itunes.set_keywords(["audiobooks", "classics", "literature"]),
        itunes.add_owner(Owner::new("Volunteer Team", "team@example.com")),
        itunes.set_subtitle("Classic literature, read aloud"),
        itunes.set_summary("Chapters from public domain novels, one per week."),
    ];
    for result in results {
        if let Err(e) = result {
            eprintln!("Unexpected rejection: {}", e);
        }
    }

    let mut chapter = FeedEntry::new("Pride and Prejudice - Chapter 1");
    if let Err(e) = chapter.itunes_mut().set_duration("24:35") {
        eprintln!("Unexpected rejection: {}", e);
    }
    feed.add_entry(chapter);

    feed
}

fn print_feed(feed: &Feed) {
    println!("Feed: {}", feed.title);

    if let Some(itunes) = feed.itunes() {
        for field in Field::ALL {
            if let Some(value) = itunes.value(field) {
                println!("  itunes:{:<14} {:?}", field, value);
            }
        }
    }

    for entry in feed.podcast_entries() {
        println!("\n  Episode: {}", entry.title);
        if let Some(duration) = entry.itunes().and_then(|meta| meta.duration()) {
            println!("    Duration: {}", duration);
        }
    }
}

fn rejection_example() {
    let mut feed = Feed::new("Rejections");
    let itunes = feed.itunes_mut();

    let attempts = [
        ("block \"123\"", itunes.set_block("123")),
        ("image .gif", itunes.set_image("http://www.example.com/image.gif")),
        ("duration \"23:456\"", itunes.set_duration("23:456")),
        ("duration \"23:234:45\"", itunes.set_duration("23:234:45")),
        ("explicit \"abc\"", itunes.set_explicit("abc")),
        ("new feed url \"http://\"", itunes.set_new_feed_url("http://")),
        ("owner email", itunes.add_owner(Owner::new("joe", "joe-at-example"))),
    ];

    for (label, result) in attempts {
        match result {
            Ok(()) => println!("✓ {} accepted", label),
            Err(e) => println!("✗ {}: {}", label, e),
        }
    }

    println!(
        "\nRecord still empty after rejections: {}",
        itunes.is_empty()
    );
}

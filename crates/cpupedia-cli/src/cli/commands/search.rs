//! Search command handler.

use anyhow::Result;
use cpupedia_core::content::ContentStore;
use cpupedia_core::search::filter_topics;

/// Prints matching topics, one per line. No match is not an error.
pub fn run(query: &str, store: &ContentStore) -> Result<()> {
    let matches = filter_topics(query, &store.topics);
    if matches.is_empty() {
        println!("No topics match '{query}'.");
        return Ok(());
    }

    for topic in matches {
        println!("{}  {}", topic.id, topic.title);
        println!("    {}", topic.short);
    }
    Ok(())
}

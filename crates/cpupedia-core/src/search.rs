//! Topic search filter.
//!
//! Plain substring containment over the concatenated topic text, compared
//! case-insensitively. Not tokenized, not fuzzy, not ranked. The function is
//! pure: it never mutates its inputs and has no side effects, so every
//! keystroke can simply re-run it over the full topic list.

use cpupedia_types::Topic;

/// Returns the topics whose searchable text contains `query` as a contiguous
/// substring, case-insensitively, preserving input order.
///
/// An empty query returns every topic unchanged.
pub fn filter_topics<'a>(query: &str, topics: &'a [Topic]) -> Vec<&'a Topic> {
    if query.is_empty() {
        return topics.iter().collect();
    }

    let needle = query.to_lowercase();
    let matches: Vec<&Topic> = topics
        .iter()
        .filter(|topic| searchable_text(topic).contains(&needle))
        .collect();

    tracing::trace!(query, hits = matches.len(), "filtered topics");
    matches
}

/// The text a topic is matched against: title, teaser and detail text
/// concatenated and lowercased.
fn searchable_text(topic: &Topic) -> String {
    let mut text = String::with_capacity(
        topic.title.len() + topic.short.len() + topic.long.len(),
    );
    text.push_str(&topic.title);
    text.push_str(&topic.short);
    text.push_str(&topic.long);
    text.to_lowercase()
}

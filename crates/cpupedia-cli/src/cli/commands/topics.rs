//! Topic command handlers.

use anyhow::{Result, bail};
use cpupedia_core::content::ContentStore;

pub fn list(store: &ContentStore) -> Result<()> {
    if store.topics.is_empty() {
        println!("No topics.");
        return Ok(());
    }
    for topic in &store.topics {
        println!("{}  {}", topic.id, topic.title);
    }
    Ok(())
}

pub fn show(id: &str, store: &ContentStore) -> Result<()> {
    let Some(topic) = store.topic_by_id(id) else {
        bail!("No topic with id '{id}'. Run `cpupedia topics list` to see the ids.");
    };

    println!("{}", topic.title);
    println!();
    println!("{}", topic.long);
    Ok(())
}

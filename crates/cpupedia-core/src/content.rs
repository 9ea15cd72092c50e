//! The built-in encyclopedia content.
//!
//! All content is compiled in and immutable: the store is constructed once at
//! startup and only ever read afterwards. There is no loading step and no
//! error path.

use cpupedia_types::{Hero, Highlight, TimelineEvent, Topic};

/// Read-only collection of everything the encyclopedia renders.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub hero: Hero,
    pub highlights: Vec<Highlight>,
    pub topics: Vec<Topic>,
    pub timeline: Vec<TimelineEvent>,
}

impl ContentStore {
    /// Returns the compiled-in dataset.
    pub fn builtin() -> Self {
        Self {
            hero: Hero {
                title: "CPU Encyclopedia — From Vacuum Tubes to RISC-V".to_string(),
                subtitle: "Everything about CPUs for beginners and experts.".to_string(),
                cta: "Explore the Encyclopedia".to_string(),
            },
            highlights: vec![
                Highlight {
                    id: "isa".to_string(),
                    title: "Instruction Set Architectures".to_string(),
                    desc: "x86, ARM, and RISC-V: rules for software-hardware communication."
                        .to_string(),
                    tag: "Core".to_string(),
                },
                Highlight {
                    id: "microarch".to_string(),
                    title: "Microarchitecture".to_string(),
                    desc: "Pipeline designs, caches, superscalar execution.".to_string(),
                    tag: "Deep".to_string(),
                },
                Highlight {
                    id: "evolution".to_string(),
                    title: "Evolution Timeline".to_string(),
                    desc: "From early CPUs to cutting-edge chips.".to_string(),
                    tag: "History".to_string(),
                },
            ],
            topics: vec![
                Topic {
                    id: "cpu-def".to_string(),
                    title: "What is a CPU?".to_string(),
                    short: "Central processing unit executes program instructions.".to_string(),
                    long: "A CPU runs computer instructions by performing arithmetic, logic, \
                           control, and I/O operations. Modern CPUs include multiple cores, \
                           complex caches, and advanced processing features."
                        .to_string(),
                },
                Topic {
                    id: "riscv".to_string(),
                    title: "RISC-V — The Open ISA".to_string(),
                    short: "A free & open instruction set architecture.".to_string(),
                    long: "RISC-V provides extensibility and removes proprietary licensing \
                           constraints. It's gaining adoption in academia, industry, and \
                           embedded systems."
                        .to_string(),
                },
            ],
            // Declaration order is display order; assumed chronological.
            timeline: vec![
                TimelineEvent {
                    year: 1971,
                    title: "Intel 4004".to_string(),
                    note: "First commercial microprocessor.".to_string(),
                },
                TimelineEvent {
                    year: 1980,
                    title: "RISC Research".to_string(),
                    note: "Academic push for simplified but faster ISAs.".to_string(),
                },
                TimelineEvent {
                    year: 2008,
                    title: "ARMv8".to_string(),
                    note: "64-bit ARM architecture introduced.".to_string(),
                },
                TimelineEvent {
                    year: 2022,
                    title: "RISC-V Momentum".to_string(),
                    note: "Open ISA adoption grows worldwide.".to_string(),
                },
            ],
        }
    }

    /// Returns a store with no entries. Rendering an empty store must not
    /// panic anywhere downstream.
    pub fn empty() -> Self {
        Self {
            hero: Hero {
                title: String::new(),
                subtitle: String::new(),
                cta: String::new(),
            },
            highlights: Vec::new(),
            topics: Vec::new(),
            timeline: Vec::new(),
        }
    }

    /// Looks up a topic by id.
    pub fn topic_by_id(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_topic_ids_are_unique() {
        let store = ContentStore::builtin();
        let ids: HashSet<&str> = store.topics.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), store.topics.len());
    }

    #[test]
    fn builtin_has_expected_sections() {
        let store = ContentStore::builtin();
        assert_eq!(store.highlights.len(), 3);
        assert_eq!(store.topics.len(), 2);
        assert_eq!(store.timeline.len(), 4);
    }

    #[test]
    fn timeline_is_declared_in_chronological_order() {
        let store = ContentStore::builtin();
        let years: Vec<i32> = store.timeline.iter().map(|ev| ev.year).collect();
        let mut sorted = years.clone();
        sorted.sort_unstable();
        assert_eq!(years, sorted);
    }

    #[test]
    fn topic_by_id_finds_known_and_rejects_unknown() {
        let store = ContentStore::builtin();
        assert_eq!(
            store.topic_by_id("cpu-def").map(|t| t.title.as_str()),
            Some("What is a CPU?")
        );
        assert!(store.topic_by_id("nope").is_none());
    }

    #[test]
    fn empty_store_has_no_entries() {
        let store = ContentStore::empty();
        assert!(store.highlights.is_empty());
        assert!(store.topics.is_empty());
        assert!(store.timeline.is_empty());
        assert!(store.topic_by_id("cpu-def").is_none());
    }
}

//! Shared data types for the CPU encyclopedia.
//!
//! Everything here is plain immutable data: records are built once at startup
//! by the content store and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// An encyclopedia entry with a short teaser and a longer detail text.
///
/// Identity is the `id` field; ids are unique within a content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Stable identifier, e.g. `"riscv"`.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-line teaser shown in the topic list.
    pub short: String,
    /// Full detail text shown in the detail panel.
    pub long: String,
}

/// A promotional summary card shown above the topic list.
///
/// Highlights are display-only: they are never filtered or selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: String,
    pub title: String,
    pub desc: String,
    /// Short category badge, e.g. `"Core"` or `"History"`.
    pub tag: String,
}

/// A dated historical note, rendered in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: i32,
    pub title: String,
    pub note: String,
}

/// Page header copy: title, subtitle and the call-to-action label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

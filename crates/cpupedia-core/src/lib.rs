//! Core CPU encyclopedia library (content store, search filter, config).

pub mod config;
pub mod content;
pub mod search;

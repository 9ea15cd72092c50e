//! Full-screen TUI for the CPU encyclopedia.

pub mod common;
pub mod effects;
pub mod events;
pub mod overlays;
pub mod page;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use cpupedia_core::config::Config;
use cpupedia_core::content::ContentStore;
pub use runtime::TuiRuntime;

/// Runs the interactive encyclopedia until the user quits.
pub fn run(config: &Config, store: ContentStore) -> Result<()> {
    // The full-screen UI needs a real terminal to take over.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The encyclopedia UI requires a terminal.\n\
             Use `cpupedia search <query>` for non-interactive lookups."
        );
    }

    let mut runtime = TuiRuntime::new(config, store)?;
    runtime.run()
}

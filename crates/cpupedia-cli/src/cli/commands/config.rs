//! Config command handlers.

use anyhow::{Context, Result};
use cpupedia_core::config::{Config, paths};

pub fn path() {
    println!("{}", paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = paths::config_path();
    let written = Config::init_at(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    if written {
        println!("Created config at {}", config_path.display());
    } else {
        println!("Config already exists at {}", config_path.display());
    }
    Ok(())
}

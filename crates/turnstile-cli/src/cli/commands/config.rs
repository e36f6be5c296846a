//! Config inspection commands.

use anyhow::Result;
use turnstile_core::config::{Config, paths};

pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let config_path = paths::config_path();
    if !Config::init_at(&config_path)? {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }
    println!("Created config at {}", config_path.display());
    Ok(())
}

//! Config command handlers.

use anyhow::{Context, Result};
use todo_core::config::{self, Config};

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

pub fn generate() -> Result<()> {
    print!("{}", Config::generate()?);
    Ok(())
}

/// Prints the settings a command would run with, after env overrides.
/// Secrets are reported as set/unset only.
pub fn show(config: &Config) -> Result<()> {
    let base_url = config.effective_base_url()?;
    let set_or_unset = |present: bool| if present { "set" } else { "unset" };

    println!("config     {}", config::paths::config_path().display());
    println!("base_url   {base_url}");
    println!("api_key    {}", set_or_unset(config.effective_api_key().is_some()));
    match config.request_timeout() {
        Some(timeout) => println!("timeout    {}s", timeout.as_secs()),
        None => println!("timeout    none"),
    }
    match config.credentials() {
        Some(params) => println!("account    {}", params.email),
        None => println!("account    unset"),
    }
    println!("log_level  {}", config.log_level);
    Ok(())
}

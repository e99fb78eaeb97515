use anyhow::Result;
use colored::Colorize;
use loom_infrastructure::{ConfigService, LoomPaths};

use crate::context::effective_client_config;

pub fn show(api_url: Option<&str>) -> Result<()> {
    let paths = LoomPaths::default();
    let client = effective_client_config(&paths, api_url)?;

    println!("{}", "[client]".bold());
    println!("api_base_url = {}", client.api_base_url);
    match client.request_timeout_secs {
        Some(secs) => println!("request_timeout_secs = {}", secs),
        None => println!("request_timeout_secs = {}", "none".dimmed()),
    }
    Ok(())
}

pub fn path() -> Result<()> {
    let config = ConfigService::new(&LoomPaths::default())?;
    println!("{}", config.path().display());
    Ok(())
}

pub fn set_url(url: &str) -> Result<()> {
    let config = ConfigService::new(&LoomPaths::default())?;
    config.set_api_base_url(url)?;
    println!(
        "{} api_base_url = {} saved to {}",
        "✓".green(),
        url.trim(),
        config.path().display()
    );
    Ok(())
}

//! Configuration validation command

use anyhow::{Context, Result};
use viewbridge_core::BridgeConfig;

pub const DEFAULT_CONFIG_PATH: &str = "viewbridge.toml";

/// Load and validate a configuration file
pub fn load(path: &str) -> Result<BridgeConfig> {
    let config = BridgeConfig::from_file(path)
        .with_context(|| format!("Failed to load config: {path}"))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {path}"))?;
    Ok(config)
}

pub fn check(config_path: Option<String>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    println!("Checking config: {}", path);

    let config = load(&path)?;

    println!("✓ Transport: {}", config.transport);
    if config.transport == viewbridge_core::TransportKind::Webkit {
        println!("✓ Handler: {}", config.handler_name);
    }
    println!("✓ Size: {}x{}", config.width, config.height);
    println!("✓ Protocol: {}", config.protocol_name);
    println!("\nConfig is valid!");

    Ok(())
}

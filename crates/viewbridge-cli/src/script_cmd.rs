//! Bootstrap script rendering command

use crate::config_check;
use anyhow::{Context, Result};
use viewbridge_core::{BridgeConfig, TransportKind};
use viewbridge_transport::bootstrap_script;

/// Resolve the effective configuration: file (if any), then flag overrides
pub fn resolve_config(
    transport: Option<String>,
    handler: Option<String>,
    config_path: Option<String>,
) -> Result<BridgeConfig> {
    let mut config = match config_path {
        Some(path) => config_check::load(&path)?,
        None => BridgeConfig::default(),
    };

    if let Some(name) = transport {
        config.transport = name.parse::<TransportKind>()?;
    }
    if let Some(name) = handler {
        config.handler_name = name;
    }

    config.validate().context("Invalid script options")?;
    Ok(config)
}

pub fn run(
    transport: Option<String>,
    handler: Option<String>,
    config_path: Option<String>,
    output: Option<String>,
) -> Result<()> {
    let config = resolve_config(transport, handler, config_path)?;
    let script = bootstrap_script(config.transport, &config.handler_name);

    tracing::debug!(transport = %config.transport, "rendered bootstrap script");

    match output {
        Some(path) => {
            std::fs::write(&path, &script)
                .with_context(|| format!("Failed to write script: {path}"))?;
            eprintln!("Wrote {} bootstrap script to {}", config.transport, path);
        }
        None => print!("{script}"),
    }

    Ok(())
}

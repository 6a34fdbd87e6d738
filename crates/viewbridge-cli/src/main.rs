//! viewbridge CLI - page script generator
//!
//! Commands:
//! - `viewbridge script` - Render the bootstrap script for a transport
//! - `viewbridge check` - Validate a viewbridge.toml configuration

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod config_check;
mod script_cmd;

#[derive(Parser)]
#[command(name = "viewbridge")]
#[command(author, version, about = "Page script tooling for viewbridge", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page bootstrap script
    Script {
        /// Host transport (webkit, ipc); overrides the config file
        #[arg(short, long)]
        transport: Option<String>,

        /// WebKit message handler name; overrides the config file
        #[arg(long)]
        handler: Option<String>,

        /// Path to viewbridge.toml
        #[arg(short, long)]
        config: Option<String>,

        /// Write the script to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a viewbridge.toml configuration
    Check {
        /// Path to viewbridge.toml (default: ./viewbridge.toml)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Script {
            transport,
            handler,
            config,
            output,
        } => {
            script_cmd::run(transport, handler, config, output)?;
        }
        Commands::Check { config } => {
            config_check::check(config)?;
        }
    }

    Ok(())
}

//! Command handlers for the figdoc CLI.

pub mod generate;
pub mod init;
pub mod inspect;

use crate::cli::Cli;
use figdoc_core::config::FigdocConfig;
use figdoc_core::error::Result;
use tracing::{error, info};

/// Loads configuration for a command, applying the global `--output` override.
pub fn load_config(cli: &Cli) -> Result<FigdocConfig> {
    let mut config = match FigdocConfig::load(cli.config.as_deref()) {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    if let Some(output) = &cli.output {
        config.typesync.output_path = output.to_string_lossy().into_owned();
    }

    Ok(config)
}

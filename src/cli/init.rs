//! Init command implementation.
//!
//! Writes an `icongrid.yaml` with every option at its default value.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{IconError, Result};
use crate::output::{display_path, Printer};

/// Write a default icongrid.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing icongrid.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(IconError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = Config::default().to_yaml()?;
    fs::write(&config_path, yaml).map_err(|e| IconError::Io {
        path: config_path.clone(),
        message: format!("Failed to write configuration: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));
    Ok(())
}

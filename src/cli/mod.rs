pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod lookup;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// icongrid - Map icon composition from an SVG shape sheet
#[derive(Parser, Debug)]
#[command(name = "icongrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose icons and write the grid sheet and icon files
    Build(build::BuildArgs),

    /// List shape ids found in the icon sheet
    List(list::ListArgs),

    /// Show the icons a tag set resolves to
    Lookup(lookup::LookupArgs),

    /// Write a default icongrid.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Configuration from an explicit path, or icongrid.yaml in the working directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(Path::new(".")),
    }
}

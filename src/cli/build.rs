//! Build command implementation.
//!
//! Extracts shapes, composes icons from the scheme and writes the grid
//! sheet plus one file per icon, by id and by name.

use std::path::PathBuf;

use clap::Args;

use crate::collection::IconCollection;
use crate::config::Config;
use crate::diagnostics::{print_diagnostics, Diagnostics};
use crate::error::{IconError, Result};
use crate::extract::ShapeExtractor;
use crate::output::{display_path, plural, Printer};
use crate::scheme::Scheme;
use crate::types::Colour;

/// Compose icons and write the grid sheet and icon files
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Configuration file (default: ./icongrid.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// SVG sheet with the shapes
    #[arg(long)]
    pub icons: Option<PathBuf>,

    /// JSON file with shape names and parts
    #[arg(long)]
    pub icons_config: Option<PathBuf>,

    /// Scheme with the matcher rules
    #[arg(long)]
    pub scheme: Option<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Foreground colour of every icon
    #[arg(long)]
    pub color: Option<Colour>,

    /// Sheet background, also used for white plates
    #[arg(long)]
    pub background_color: Option<Colour>,

    /// Add icons for shapes no rule uses
    #[arg(long)]
    pub add_unused: bool,

    /// Add an icon for every shape, parts included
    #[arg(long)]
    pub add_all: bool,

    /// Grid columns
    #[arg(long)]
    pub columns: Option<usize>,

    /// Pixels between grid cell centres
    #[arg(long)]
    pub step: Option<f64>,

    /// Draw an outline under individual icon files
    #[arg(long)]
    pub outline: bool,

    /// Outline opacity, 0 to 1
    #[arg(long)]
    pub outline_opacity: Option<f64>,

    /// Also write a JSON index of the grid sheet
    #[arg(long)]
    pub index: bool,

    /// Sort icons by shape ids before writing
    #[arg(long)]
    pub sort: bool,
}

impl BuildArgs {
    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Result<Config> {
        if let Some(icons) = &self.icons {
            config.icons = icons.clone();
        }
        if let Some(icons_config) = &self.icons_config {
            config.icons_config = Some(icons_config.clone());
        }
        if let Some(scheme) = &self.scheme {
            config.scheme = scheme.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        if let Some(background) = self.background_color {
            config.background_color = background;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(opacity) = self.outline_opacity {
            config.outline_opacity = opacity;
        }
        config.add_unused |= self.add_unused;
        config.add_all |= self.add_all;
        config.outline |= self.outline;
        config.index |= self.index;

        config.validate()?;
        Ok(config)
    }
}

/// What a build produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub icons: usize,
    pub errors: usize,
    pub warnings: usize,
    pub grid: PathBuf,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let config = args.apply(super::load_config(args.config.as_deref())?)?;
    let summary = build(&config, args.sort, printer)?;

    let mut message = format!("{} in {}", plural(summary.icons, "icon", "icons"), display_path(&config.output));
    if summary.errors > 0 {
        message.push_str(&format!(" ({})", plural(summary.errors, "error", "errors")));
        printer.warning("Finished", &message);
    } else {
        printer.status("Finished", &message);
    }
    Ok(())
}

/// Run the whole pipeline for `config`.
///
/// Missing shapes and bad colours are reported and drawn as placeholders;
/// only I/O and parse failures of the inputs abort the build.
pub fn build(config: &Config, sort: bool, printer: &Printer) -> Result<BuildSummary> {
    printer.status("Extracting", &display_path(&config.icons));
    let extractor = ShapeExtractor::load(&config.icons, config.icons_config.as_deref())?;
    let scheme = Scheme::load(&config.scheme)?;

    let mut collection = IconCollection::from_scheme(&scheme, &extractor, &config.collection_options());
    if sort {
        collection.sort();
    }
    printer.info(
        "Composed",
        &format!(
            "{} from {}",
            plural(collection.len(), "icon", "icons"),
            plural(extractor.len(), "shape", "shapes")
        ),
    );

    let mut diagnostics = Diagnostics::new();
    diagnostics.merge(extractor.diagnostics().clone());
    diagnostics.merge(collection.diagnostics().clone());
    print_diagnostics(&diagnostics, printer);

    let grid = config.grid_path();
    if let Some(parent) = grid.parent() {
        std::fs::create_dir_all(parent).map_err(|e| IconError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    printer.status("Writing", &display_path(&grid));
    let placement = collection.draw_grid(&grid, &config.layout(), config.background_color)?;

    if config.index {
        let index = config.index_path();
        printer.status("Writing", &display_path(&index));
        collection.write_grid_index(&index, &placement)?;
    }

    for (dir, by_name) in [(config.by_id_dir(), false), (config.by_name_dir(), true)] {
        printer.status("Writing", &display_path(&dir));
        collection.draw_icons(&dir, &config.file_options(by_name))?;
    }

    Ok(BuildSummary {
        icons: collection.len(),
        errors: diagnostics.error_count(),
        warnings: diagnostics.warning_count(),
        grid,
    })
}

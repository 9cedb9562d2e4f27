//! List command implementation.
//!
//! Prints shape ids from the icon sheet to stdout, one per line, followed
//! by the shape name and categories when the metadata has them.

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::collection::{CollectionOptions, IconCollection};
use crate::config::Config;
use crate::diagnostics::print_diagnostics;
use crate::error::Result;
use crate::extract::ShapeExtractor;
use crate::output::{display_path, plural, Printer};
use crate::scheme::Scheme;
use crate::types::Shape;

/// List shape ids found in the icon sheet
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Configuration file (default: ./icongrid.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Only shapes no scheme rule uses
    #[arg(long)]
    pub unused: bool,

    /// Only shapes marked as parts
    #[arg(long)]
    pub parts: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let lines = list(&config, &args, printer)?;

    let mut stdout = io::stdout().lock();
    for line in &lines {
        writeln!(stdout, "{}", line)?;
    }
    printer.info("Listed", &plural(lines.len(), "shape", "shapes"));
    Ok(())
}

/// `id`, `id<TAB>name` or `id<TAB>name<TAB>category,...` lines for every
/// selected shape, sorted by id.
pub fn list(config: &Config, args: &ListArgs, printer: &Printer) -> Result<Vec<String>> {
    printer.status("Extracting", &display_path(&config.icons));
    let extractor = ShapeExtractor::load(&config.icons, config.icons_config.as_deref())?;
    print_diagnostics(extractor.diagnostics(), printer);

    let used: BTreeSet<String> = if args.unused {
        let scheme = Scheme::load(&config.scheme)?;
        let collection = IconCollection::from_scheme(&scheme, &extractor, &CollectionOptions::default());
        collection
            .icons()
            .iter()
            .flat_map(|icon| icon.shape_ids())
            .map(str::to_string)
            .collect()
    } else {
        BTreeSet::new()
    };

    Ok(extractor
        .shapes()
        .filter(|shape| !args.parts || shape.is_part)
        .filter(|shape| !used.contains(&shape.id))
        .map(list_line)
        .collect())
}

fn list_line(shape: &Shape) -> String {
    let mut line = shape.id.clone();
    if shape.name.is_some() || !shape.categories.is_empty() {
        line.push('\t');
        line.push_str(shape.display_name());
    }
    if !shape.categories.is_empty() {
        line.push('\t');
        line.push_str(&shape.categories.iter().map(String::as_str).collect::<Vec<_>>().join(","));
    }
    line
}

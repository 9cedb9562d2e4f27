//! Lookup command implementation.
//!
//! Resolves a tag set against the scheme and prints the shape stacks of
//! every matching rule, one stack per line.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::collection::combinations;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::scheme::{Scheme, DEFAULT_SHAPE_ID};

/// Show the icons a tag set resolves to
#[derive(Args, Debug, Default)]
pub struct LookupArgs {
    /// Configuration file (default: ./icongrid.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Tags as KEY=VALUE
    #[arg(required = true, value_parser = parse_tag)]
    pub tags: Vec<(String, String)>,
}

fn parse_tag(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{}`", s)),
    }
}

pub fn run(args: LookupArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let scheme = Scheme::load(&config.scheme)?;
    let tags: BTreeMap<String, String> = args.tags.into_iter().collect();

    let lines = lookup(&scheme, &tags);
    let mut stdout = io::stdout().lock();
    for line in &lines {
        writeln!(stdout, "{}", line)?;
    }

    if lines.is_empty() {
        printer.warning("Unmatched", "no rule matches these tags");
    } else {
        printer.info("Matched", &plural(lines.len(), "stack", "stacks"));
    }
    Ok(())
}

/// Shape stacks of every matcher accepting `tags`, ids joined by ` + `.
pub fn lookup(scheme: &Scheme, tags: &BTreeMap<String, String>) -> Vec<String> {
    scheme
        .matching(tags)
        .into_iter()
        .flat_map(combinations)
        .map(|stack| {
            stack
                .iter()
                .map(|entry| entry.shape_id().unwrap_or(DEFAULT_SHAPE_ID))
                .collect::<Vec<_>>()
                .join(" + ")
        })
        .collect()
}

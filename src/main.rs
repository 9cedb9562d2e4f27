use clap::Parser;
use miette::Result;

use icongrid::cli::{self, Cli, Commands};
use icongrid::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => cli::build::run(args, &printer)?,
        Commands::List(args) => cli::list::run(args, &printer)?,
        Commands::Lookup(args) => cli::lookup::run(args, &printer)?,
        Commands::Init(args) => cli::init::run(args, &printer)?,
        Commands::Completions(args) => cli::completions::run(args)?,
    }

    Ok(())
}

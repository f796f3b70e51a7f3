//! wideroute CLI
//!
//! Enumerates access patterns for the tables in a CQL file.

use clap::Parser;

mod args;
mod output;
mod run;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, so stdout carries only the listing.
    run::init_logging()?;

    let plans = run::execute(&cli)?;
    print!("{}", run::render(&plans, cli.format)?);

    Ok(())
}

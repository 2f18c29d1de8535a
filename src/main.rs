use anyhow::Result;
use clap::Parser;
use colored::*;

use greppy::constants::{BANNER, MISSING_MODE_ERROR};
use greppy::logging::init_logging;
use greppy::processor;
use greppy::types::{Cli, Modes};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, !cli.no_color);

    if !cli.silent {
        eprintln!("{}", BANNER.bright_cyan());
    }

    let Some(modes) = Modes::from_cli(&cli) else {
        println!("{}", MISSING_MODE_ERROR);
        std::process::exit(1);
    };

    processor::run(&cli, modes).await
}

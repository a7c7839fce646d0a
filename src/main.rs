mod cli;
mod config;
mod convert;
mod convert_cmd;
mod generate;
mod interpolate_cmd;
mod logging;
mod request;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::run(args),
        Command::Interpolate(args) => interpolate_cmd::run(args),
        Command::Convert(args) => convert_cmd::run(args),
    }
}

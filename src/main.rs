use std::process::ExitCode;

use clap::Parser;
use registration_validator::cli::{self, Cli, Command};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate(args) => cli::validate::run(args),
        Command::Messages => cli::messages::run(),
    }
}

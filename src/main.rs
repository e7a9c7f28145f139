//! # sentcorr CLI

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use colored::Colorize;

use crate::cli::CorrelateCommand;

mod cli;

#[derive(Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Correlate daily news sentiment with daily stock returns"
)]
struct Cli {
    #[command(flatten)]
    command: CorrelateCommand,

    #[arg(short = 'c', long = "config", help = "Path to a TOML config file")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    sentcorr::init();

    match cli.command.exec(cli.config.as_deref()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[!] {}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}

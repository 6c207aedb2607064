//! ormsplit - splits packed metallic-roughness textures into per-map PNGs.
//!
//! The binary parses arguments and dispatches to the command
//! implementations in the library crate.

use clap::Parser;
use std::process::ExitCode;

use ormsplit_cli::cli_args::{Cli, Commands};
use ormsplit_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Split {
            input,
            compression,
            json,
        } => commands::split::run(&input, &compression, json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

//! nestmod CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::process;

use clap::Parser;
use console::style;
use nestmod::commands::{GenerateCommand, DEFAULT_MODULES_ROOT};
use nestmod::ScaffoldError;

#[derive(Parser)]
#[command(name = "nestmod")]
#[command(version)]
#[command(about = "Scaffold a complete NestJS CRUD feature module", long_about = None)]
struct Cli {
    /// Feature name (e.g., `product` or `UserLog`)
    name: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let command = GenerateCommand::new(cli.name, PathBuf::from(DEFAULT_MODULES_ROOT));
    if let Err(err) = command.execute() {
        match err.downcast_ref::<ScaffoldError>() {
            Some(scaffold_err) if scaffold_err.is_reported() => {
                eprintln!("{} {scaffold_err}", style("Error:").red().bold());
            }
            _ => eprintln!("{} {err:?}", style("Error:").red().bold()),
        }
        process::exit(1);
    }
}

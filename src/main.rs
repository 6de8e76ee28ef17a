//! `render` CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, render, and map failures
//! to exit code 1 (argument errors from clap exit with 2 on their own).
//! For programmatic use, prefer the library API (`h5render::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! # games-data-gen
//!
//! Build-time generator for the web project's typed games data module.
//! Reads `src/data/games.json` and writes `src/data/games.ts`; on failure
//! writes an empty fallback module and exits non-zero.

mod cli;
mod core;
mod run;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use cli::{Args, Commands};

fn main() -> ExitCode {
    let args = Args::parse();
    run::init_logger(&args);

    match args.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
        None => run::run_materialize(&args),
    }
}

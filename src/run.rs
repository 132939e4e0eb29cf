//! Application run modes: logger init, materializer run, exit status mapping.

use std::process::ExitCode;

use chrono::Utc;

use crate::cli::Args;
use crate::core::materialize::{self, Outcome};
use crate::core::{app, paths};

/// Exit status when the fallback module was written.
const EXIT_FALLBACK: u8 = 1;
/// Exit status when not even the fallback could be written.
const EXIT_FATAL: u8 = 2;

/// Initialize env_logger on stderr, honoring `RUST_LOG` over the -v/-q level.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Regenerate games.ts under the selected project root.
pub fn run_materialize(args: &Args) -> ExitCode {
    let root = args
        .project_dir
        .clone()
        .unwrap_or_else(paths::default_project_root);
    log::info!("Project root {}", root.display());

    let outcome = match materialize::materialize(&root, Utc::now()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            log::debug!("Fallback write to {} failed: {:?}", e.path().display(), e);
            return ExitCode::from(EXIT_FATAL);
        }
    };
    log::info!(
        "{} {} wrote {}",
        app::NAME,
        app::VERSION,
        outcome.output().display()
    );
    match outcome {
        Outcome::Generated { count, .. } => {
            log::info!("Generated {} games", count);
            ExitCode::SUCCESS
        }
        Outcome::Fallback { cause, .. } => {
            log::debug!("Fallback cause: {:?}", cause);
            ExitCode::from(EXIT_FALLBACK)
        }
    }
}

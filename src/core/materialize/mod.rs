//! Games data materializer: `games.json` in, typed `games.ts` module out.
//!
//! Any read, parse, or write failure on the main path is reported and replaced by a
//! fallback module with empty data, so the web build always finds a `games.ts`. Only a
//! failure to write that fallback surfaces as an error.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::core::error::MaterializeError;
use crate::core::paths;
use crate::core::record;
use crate::core::render::{self, ArtifactKind};

/// Result of a materializer run that produced a module on disk.
#[derive(Debug)]
pub enum Outcome {
    /// Full data written.
    Generated { count: usize, output: PathBuf },
    /// Main path failed; the empty fallback module was written instead.
    Fallback {
        output: PathBuf,
        cause: MaterializeError,
    },
}

impl Outcome {
    pub fn output(&self) -> &Path {
        match self {
            Outcome::Generated { output, .. } | Outcome::Fallback { output, .. } => output,
        }
    }

    #[cfg(test)]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }
}

/// Read `<root>/src/data/games.json` and write `<root>/src/data/games.ts`.
///
/// Returns `Err` only when the fallback module itself cannot be written.
pub fn materialize(root: &Path, generated_at: DateTime<Utc>) -> Result<Outcome, MaterializeError> {
    let input = paths::input_path(root);
    let output = paths::output_path(root);
    log::debug!("Input {}, output {}", input.display(), output.display());

    match generate(&input, &output, generated_at) {
        Ok(count) => {
            println!("TypeScript games data saved to {}", output.display());
            Ok(Outcome::Generated { count, output })
        }
        Err(cause) => {
            eprintln!(
                "Failed to read games data or generate TypeScript file: {}",
                cause
            );
            write_artifact(&output, &render::render_fallback(generated_at))?;
            println!("Created fallback TypeScript file with empty data");
            Ok(Outcome::Fallback { output, cause })
        }
    }
}

/// Main path: read, parse, render, write. Returns the number of records written.
fn generate(
    input: &Path,
    output: &Path,
    generated_at: DateTime<Utc>,
) -> Result<usize, MaterializeError> {
    println!("Reading games data from JSON file...");
    let json = fs::read_to_string(input).map_err(|source| MaterializeError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let parse_err = |source| MaterializeError::Parse {
        path: input.to_path_buf(),
        source,
    };
    let records = record::parse_records(&json).map_err(parse_err)?;
    println!("Loaded {} games from JSON file", records.len());

    let games_json = record::to_pretty_json(&records).map_err(parse_err)?;
    let module = render::render_module(ArtifactKind::Generated, &games_json, generated_at);
    write_artifact(output, &module)?;
    Ok(records.len())
}

/// Overwrite the output file in place.
fn write_artifact(output: &Path, contents: &str) -> Result<(), MaterializeError> {
    fs::write(output, contents).map_err(|source| MaterializeError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote {} bytes to {}", contents.len(), output.display());
    Ok(())
}

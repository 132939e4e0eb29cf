//! Centralized path helpers for the games data input and generated module.

use std::path::{Path, PathBuf};

use crate::core::app;

/// Data directory relative to the project root.
const DATA_DIR: [&str; 2] = ["src", "data"];

const INPUT_FILE: &str = "games.json";
const OUTPUT_FILE: &str = "games.ts";

/// Default project root: the parent of this crate's manifest directory
/// (the crate lives at `<project>/scripts/`).
pub fn default_project_root() -> PathBuf {
    let manifest = Path::new(app::MANIFEST_DIR);
    manifest
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest.to_path_buf())
}

/// `<root>/src/data/`
pub fn data_dir(root: &Path) -> PathBuf {
    DATA_DIR.iter().fold(root.to_path_buf(), |p, seg| p.join(seg))
}

/// Source JSON (`<root>/src/data/games.json`).
pub fn input_path(root: &Path) -> PathBuf {
    data_dir(root).join(INPUT_FILE)
}

/// Generated TypeScript module (`<root>/src/data/games.ts`).
pub fn output_path(root: &Path) -> PathBuf {
    data_dir(root).join(OUTPUT_FILE)
}

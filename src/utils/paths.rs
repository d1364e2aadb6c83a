//! Path utilities for cbuild

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Name of the version marker file
pub const VERSION_FILE: &str = "version.txt";

/// Name of the generator output and build root
pub const BUILD_DIR: &str = "build";

/// The project root is always the current working directory
pub fn project_root() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current working directory")
}

/// Get the version marker path
pub fn version_file(project_root: &Path) -> PathBuf {
    project_root.join(VERSION_FILE)
}

/// Get the build output directory
pub fn build_dir(project_root: &Path) -> PathBuf {
    project_root.join(BUILD_DIR)
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

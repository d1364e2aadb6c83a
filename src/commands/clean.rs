//! Clean command implementation

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::build::platform::Platform;
use crate::error::CbuildError;
use crate::utils::{paths, terminal};

/// What a clean run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The build directory was removed; carries the bytes freed
    Removed(u64),
    /// There was no build directory to remove
    NothingToClean,
}

/// Removes the build output directory
pub struct CleanCommand<'a> {
    build_dir: PathBuf,
    platform: &'a dyn Platform,
}

impl<'a> CleanCommand<'a> {
    pub fn new(project_root: &Path, platform: &'a dyn Platform) -> Self {
        Self {
            build_dir: paths::build_dir(project_root),
            platform,
        }
    }

    /// Execute the clean command
    pub fn execute(&self, verbose: bool) -> Result<CleanOutcome, CbuildError> {
        terminal::print_info("FORCE CLEARING BUILD DIRECTORY");

        if self.build_dir.exists() && !self.build_dir.is_dir() {
            terminal::print_warning(&format!(
                "{} is not a directory, leaving it untouched",
                self.build_dir.display()
            ));
            return Ok(CleanOutcome::NothingToClean);
        }

        if !self.build_dir.is_dir() {
            return Ok(self.report(CleanOutcome::NothingToClean));
        }

        let size = get_dir_size(&self.build_dir);
        if verbose {
            terminal::print_info(&format!(
                "Removing {} via {} platform",
                self.build_dir.display(),
                self.platform.name()
            ));
        }

        self.platform
            .remove_dir_recursive(&self.build_dir)
            .map_err(|e| {
                CbuildError::filesystem(
                    format!("Failed to remove {}", self.build_dir.display()),
                    e,
                )
            })?;

        Ok(self.report(CleanOutcome::Removed(size)))
    }

    fn report(&self, outcome: CleanOutcome) -> CleanOutcome {
        match outcome {
            CleanOutcome::Removed(bytes) => terminal::print_success(&format!(
                "Removed {} ({})",
                self.build_dir.display(),
                format_size(bytes)
            )),
            CleanOutcome::NothingToClean => terminal::print_info(&format!(
                "{} does not exist, nothing to clean",
                self.build_dir.display()
            )),
        }
        outcome
    }
}

fn get_dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| e.metadata().ok())
        .filter(|m| m.is_file())
        .map(|m| m.len())
        .sum()
}

fn format_size(size_bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::platform::UnixPlatform;
    use std::fs;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_clean_removes_build_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let build = tmp.path().join("build");
        fs::create_dir_all(build.join("nested")).unwrap();
        fs::write(build.join("nested/a.o"), vec![0u8; 100]).unwrap();

        let outcome = CleanCommand::new(tmp.path(), &UnixPlatform)
            .execute(false)
            .unwrap();
        assert_eq!(outcome, CleanOutcome::Removed(100));
        assert!(!build.exists());
    }

    #[test]
    fn test_clean_leaves_plain_file_alone() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("build"), b"not a dir").unwrap();
        let outcome = CleanCommand::new(tmp.path(), &UnixPlatform)
            .execute(false)
            .unwrap();
        assert_eq!(outcome, CleanOutcome::NothingToClean);
        assert!(tmp.path().join("build").is_file());
    }

    #[test]
    fn test_clean_without_build_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let outcome = CleanCommand::new(tmp.path(), &UnixPlatform)
            .execute(true)
            .unwrap();
        assert_eq!(outcome, CleanOutcome::NothingToClean);
    }
}

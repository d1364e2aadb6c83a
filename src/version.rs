//! Version marker loading
//!
//! The project keeps its current version as a single line in `version.txt`.
//! It is only used for the status banner, but a missing file means cbuild is
//! not running from a project root, so it is treated as fatal.

use std::fs;
use std::path::Path;

use crate::error::CbuildError;
use crate::utils::paths;

/// Read the version marker from `project_root/version.txt`.
///
/// Surrounding whitespace is trimmed and only the first line is kept.
pub fn load_version(project_root: &Path) -> Result<String, CbuildError> {
    let path = paths::version_file(project_root);
    let contents = fs::read_to_string(&path)
        .map_err(|source| CbuildError::MissingVersionFile { path, source })?;

    Ok(contents
        .trim()
        .lines()
        .next()
        .unwrap_or_default()
        .trim_end()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_version_trims() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("version.txt"), "  1.4.2\r\n\n").unwrap();
        assert_eq!(load_version(tmp.path()).unwrap(), "1.4.2");
    }

    #[test]
    fn test_load_version_keeps_first_line() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("version.txt"), "0.9.0 \nnotes\n").unwrap();
        assert_eq!(load_version(tmp.path()).unwrap(), "0.9.0");
    }

    #[test]
    fn test_missing_version_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_version(tmp.path()).unwrap_err();
        assert!(matches!(err, CbuildError::MissingVersionFile { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("version.txt"));
    }
}

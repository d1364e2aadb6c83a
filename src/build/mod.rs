//! Build orchestration
//!
//! ```text
//! cli.rs → commands/build.rs → cmake.rs (configure) → platform.rs (build driver)
//! ```
//!
//! ## Modules
//!
//! - `cmake` - configure command construction
//! - `platform` - per-OS build driver and directory removal

pub mod cmake;
pub mod platform;

use std::fmt;

/// CMake build type selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Resolve the mode from the two mode flags. Debug wins when both are set.
    pub fn from_flags(debug: bool, release: bool) -> Option<Self> {
        if debug {
            Some(BuildMode::Debug)
        } else if release {
            Some(BuildMode::Release)
        } else {
            None
        }
    }

    /// Banner printed before configuring
    pub fn banner(self, version: &str) -> String {
        match self {
            BuildMode::Debug => format!(
                "LATEST VERIFIED VERSION {}: BUILDING IN DEBUG MODE",
                version
            ),
            BuildMode::Release => format!(
                "LATEST RELEASE VERSION {}: BUILDING IN RELEASE MODE",
                version
            ),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Debug => write!(f, "Debug"),
            BuildMode::Release => write!(f, "Release"),
        }
    }
}

/// External programs cbuild drives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolset {
    /// Build-system generator
    pub cmake: String,
    /// Native build driver on Unix
    pub make: String,
}

impl Default for Toolset {
    fn default() -> Self {
        Self {
            cmake: "cmake".to_string(),
            make: "make".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_takes_precedence() {
        assert_eq!(BuildMode::from_flags(true, true), Some(BuildMode::Debug));
        assert_eq!(BuildMode::from_flags(true, false), Some(BuildMode::Debug));
        assert_eq!(BuildMode::from_flags(false, true), Some(BuildMode::Release));
        assert_eq!(BuildMode::from_flags(false, false), None);
    }

    #[test]
    fn test_mode_display_matches_cmake() {
        assert_eq!(BuildMode::Debug.to_string(), "Debug");
        assert_eq!(BuildMode::Release.to_string(), "Release");
    }

    #[test]
    fn test_banner_mentions_version() {
        assert!(BuildMode::Debug.banner("1.2.0").contains("1.2.0: BUILDING IN DEBUG MODE"));
        assert!(BuildMode::Release.banner("2.0").starts_with("LATEST RELEASE VERSION 2.0"));
    }
}

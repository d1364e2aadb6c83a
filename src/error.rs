//! Error types and helpers for user-friendly error messages
//!
//! Every failure in cbuild is terminal for the run. Each variant knows the
//! process exit code it maps to and, where useful, a hint that tells the user
//! how to get unstuck.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::utils::terminal::{self, Tone};

/// Errors that end a cbuild run
#[derive(Error, Debug)]
pub enum CbuildError {
    /// The version marker could not be read
    #[error("{} not found", path.display())]
    MissingVersionFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Neither a build mode nor a short-circuit flag was given
    #[error("insufficient arguments passed")]
    InsufficientArguments,

    /// Tool/executable not found on PATH
    #[error("Missing tool: {tool} (required for {required_for})")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// An external command ran and exited unsuccessfully
    #[error("`{command}` failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },

    /// An external command could not be started at all
    #[error("failed to launch `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Creating or removing the build directory failed
    #[error("{message}")]
    Filesystem {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CbuildError {
    /// Create a missing tool error with the matching install hint
    pub fn missing_tool(tool: impl Into<String>, required_for: impl Into<String>) -> Self {
        let tool = tool.into();
        let hint = hints::for_tool(&tool).to_string();
        Self::MissingTool {
            tool,
            required_for: required_for.into(),
            hint,
        }
    }

    /// Create a filesystem error
    pub fn filesystem(message: impl Into<String>, source: io::Error) -> Self {
        Self::Filesystem {
            message: message.into(),
            source,
        }
    }

    /// Process exit code for this error.
    ///
    /// A failed external command propagates its own code verbatim; every
    /// locally detected problem exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CbuildError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }

    /// Hint shown under the error, if any
    pub fn hint(&self) -> Option<&str> {
        match self {
            CbuildError::MissingVersionFile { .. } => Some(hints::version_file()),
            CbuildError::InsufficientArguments => Some(hints::insufficient_arguments()),
            CbuildError::MissingTool { hint, .. } => Some(hint),
            _ => None,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;
        use std::error::Error as _;

        terminal::print_status(
            Tone::Error,
            &format!("{} {}", style("ERROR:").red().bold(), self),
        );

        // anyhow and io errors carry the useful detail in their source chain
        let mut source = self.source();
        while let Some(cause) = source {
            eprintln!("  {} {}", style("caused by:").dim(), cause);
            source = cause.source();
        }

        if let Some(hint) = self.hint() {
            terminal::print_warning(&format!("{} {}", style("HINT:").yellow().bold(), hint));
        }
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for missing CMake
    pub fn cmake() -> &'static str {
        "Install CMake from https://cmake.org/ or use your package manager:\n\
         • macOS: brew install cmake\n\
         • Ubuntu: sudo apt install cmake\n\
         • Windows: winget install Kitware.CMake\n\
         Or point --cmake / CBUILD_CMAKE at an existing cmake binary."
    }

    /// Get hint for missing make
    pub fn make() -> &'static str {
        "Install GNU Make or use your package manager:\n\
         • macOS: xcode-select --install\n\
         • Ubuntu: sudo apt install build-essential\n\
         Or point --make / CBUILD_MAKE at an existing make binary."
    }

    /// Installation hint keyed by tool name
    pub fn for_tool(tool: &str) -> &'static str {
        let name = std::path::Path::new(tool)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(tool);
        match name {
            "cmake" => cmake(),
            "make" | "gmake" => make(),
            _ => "Install this tool and ensure it's in your PATH",
        }
    }

    pub fn version_file() -> &'static str {
        "Run cbuild from the project root; it must contain a version.txt file."
    }

    pub fn insufficient_arguments() -> &'static str {
        "USE --help or -H flag to find a usage guide"
    }
}

//! Subprocess execution
//!
//! Commands are always spawned from an argument list. Nothing is ever routed
//! through a shell, so paths with spaces need no quoting on the way out.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::CbuildError;
use crate::utils::terminal;

/// An external program invocation: program, ordered arguments, working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a command for `program` with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command from `dir`
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Quote a token for display only
fn quote(token: &str) -> String {
    if !token.is_empty() && !token.chars().any(|c| c.is_whitespace() || c == '"') {
        return token.to_string();
    }
    format!("\"{}\"", token.replace('"', "\\\""))
}

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: exit_code_of(status),
            duration,
        }
    }
}

/// Exit code of a finished child.
///
/// On Unix a child killed by a signal has no code; report it the way shells
/// do, as 128 plus the signal number.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Run a command with inherited stdio and wait for it to exit
pub fn run_command(spec: &CommandSpec, verbose: bool) -> Result<CommandResult, CbuildError> {
    let program = which::which(spec.program())
        .map_err(|_| CbuildError::missing_tool(spec.program(), spec.to_string()))?;

    let mut cmd = Command::new(program);
    cmd.args(spec.get_args());
    if let Some(dir) = spec.get_current_dir() {
        cmd.current_dir(dir);
    }
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if verbose {
        terminal::print_info(&format!("Running: {}", spec));
    }

    let start = Instant::now();
    let status = cmd.status().map_err(|source| CbuildError::Spawn {
        command: spec.to_string(),
        source,
    })?;

    Ok(CommandResult::from_status(status, start.elapsed()))
}

/// Run a command and turn a non-zero exit into [`CbuildError::CommandFailed`].
///
/// There are no retries; the first failure ends the run.
pub fn run_checked(spec: &CommandSpec, verbose: bool) -> Result<CommandResult, CbuildError> {
    let result = run_command(spec, verbose)?;
    if !result.success {
        return Err(CbuildError::CommandFailed {
            command: spec.to_string(),
            code: result.exit_code,
        });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_whitespace() {
        let spec = CommandSpec::new("cmake")
            .arg("-B")
            .arg("my build")
            .arg("-DBUILD_TESTS=ON");
        assert_eq!(spec.to_string(), "cmake -B \"my build\" -DBUILD_TESTS=ON");
    }

    #[test]
    fn test_builder_keeps_order() {
        let spec = CommandSpec::new("make")
            .args(["-j", "4"])
            .arg("all")
            .current_dir("build");
        assert_eq!(spec.program(), "make");
        assert_eq!(spec.get_args(), ["-j", "4", "all"]);
        assert_eq!(spec.get_current_dir(), Some(Path::new("build")));
    }

    #[test]
    fn test_missing_program_is_reported() {
        let spec = CommandSpec::new("cbuild-definitely-not-a-real-tool");
        let err = run_command(&spec, false).unwrap_err();
        assert!(matches!(err, CbuildError::MissingTool { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_checked_propagates_exit_code() {
        let spec = CommandSpec::new("sh").args(["-c", "exit 7"]);
        match run_checked(&spec, false) {
            Err(CbuildError::CommandFailed { code, .. }) => assert_eq!(code, 7),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_checked_success() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("sh")
            .args(["-c", "touch ran"])
            .current_dir(tmp.path());
        let result = run_checked(&spec, false).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(tmp.path().join("ran").exists());
    }
}

//! CLI argument parsing using clap derive macros

use clap::Parser;

use crate::build::{platform, BuildMode, Toolset};
use crate::commands::{build::BuildCommand, clean::CleanCommand, help};
use crate::error::CbuildError;
use crate::utils::{paths, terminal};
use crate::version;

/// cbuild - configure and build a CMake project
///
/// Runs `cmake` into ./build, then the native build driver.
#[derive(Parser, Debug)]
#[command(name = "cbuild")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Display usage [overrides all other options]
    #[arg(short = 'H', long)]
    pub help: bool,

    /// Build the test target (-DBUILD_TESTS=ON)
    #[arg(short = 'T', long)]
    pub test: bool,

    /// Build in Debug mode (-DCMAKE_BUILD_TYPE=Debug)
    #[arg(short = 'D', long)]
    pub debug: bool,

    /// Build in Release mode (-DCMAKE_BUILD_TYPE=Release)
    #[arg(short = 'R', long)]
    pub release: bool,

    /// Remove the build directory and exit
    #[arg(short = 'C', long)]
    pub clean: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// CMake executable
    #[arg(long, env = "CBUILD_CMAKE", default_value = "cmake", value_name = "PROGRAM")]
    pub cmake: String,

    /// Native build driver used on Unix
    #[arg(long, env = "CBUILD_MAKE", default_value = "make", value_name = "PROGRAM")]
    pub make: String,
}

impl Cli {
    /// Selected build mode; debug wins when both mode flags are present
    pub fn build_mode(&self) -> Option<BuildMode> {
        BuildMode::from_flags(self.debug, self.release)
    }

    pub fn toolset(&self) -> Toolset {
        Toolset {
            cmake: self.cmake.clone(),
            make: self.make.clone(),
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<(), CbuildError> {
        if self.no_color {
            terminal::disable_colors();
        }

        if self.help {
            help::print_usage();
            return Ok(());
        }

        let project_root = paths::project_root()?;
        let platform = platform::current();

        if self.clean {
            CleanCommand::new(&project_root, platform).execute(self.verbose)?;
            return Ok(());
        }

        let version = version::load_version(&project_root)?;
        let mode = self.build_mode().ok_or(CbuildError::InsufficientArguments)?;

        let command = BuildCommand {
            mode,
            tests: self.test,
            toolset: self.toolset(),
        };
        command.execute(&project_root, &version, platform, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cbuild").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_short_and_long_flags() {
        let short = parse(&["-H", "-T", "-D", "-R", "-C"]);
        let long = parse(&["--help", "--test", "--debug", "--release", "--clean"]);
        for cli in [short, long] {
            assert!(cli.help && cli.test && cli.debug && cli.release && cli.clean);
        }
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(parse(&["-D", "-R"]).build_mode(), Some(BuildMode::Debug));
        assert_eq!(parse(&["--release"]).build_mode(), Some(BuildMode::Release));
        assert_eq!(parse(&["--test"]).build_mode(), None);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["cbuild", "--fast"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
        assert!(Cli::try_parse_from(["cbuild", "-h"]).is_err());
    }

    #[test]
    fn test_help_short_circuits_before_validation() {
        // no mode, no version file needed
        let cli = parse(&["-H", "--cmake", "cbuild-no-such-cmake"]);
        assert!(cli.execute().is_ok());
    }

    #[test]
    fn test_toolset_flags() {
        let cli = parse(&["-R", "--cmake", "/opt/cmake", "--make", "gmake"]);
        assert_eq!(cli.toolset().cmake, "/opt/cmake");
        assert_eq!(cli.toolset().make, "gmake");
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

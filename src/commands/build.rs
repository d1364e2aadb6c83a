//! Build command implementation
//!
//! Configure with CMake, then hand the generated tree to the platform's build
//! driver. The driver never runs when configure fails.

use std::path::Path;

use crate::build::cmake::CMakeConfig;
use crate::build::platform::Platform;
use crate::build::{BuildMode, Toolset};
use crate::error::CbuildError;
use crate::exec::{run_checked, CommandSpec};
use crate::utils::{paths, terminal};

/// A validated configure-and-build request
#[derive(Debug, Clone)]
pub struct BuildCommand {
    pub mode: BuildMode,
    /// Build the test target (`-DBUILD_TESTS=ON`)
    pub tests: bool,
    pub toolset: Toolset,
}

impl BuildCommand {
    fn cmake_config(&self) -> CMakeConfig {
        CMakeConfig::new(&self.toolset.cmake, paths::BUILD_DIR)
            .build_type(self.mode)
            .option("BUILD_TESTS", self.tests)
    }

    /// Configure command for this request
    pub fn configure_command(&self, project_root: &Path) -> CommandSpec {
        self.cmake_config().configure_command(project_root)
    }

    /// Build driver command for this request
    pub fn build_command(&self, project_root: &Path, platform: &dyn Platform) -> CommandSpec {
        let config = self.cmake_config();
        platform.build_command(&self.toolset, project_root, config.build_dir(), self.mode)
    }

    /// Execute the build command
    pub fn execute(
        &self,
        project_root: &Path,
        version: &str,
        platform: &dyn Platform,
        verbose: bool,
    ) -> Result<(), CbuildError> {
        terminal::print_info(&self.mode.banner(version));

        let build_dir = paths::build_dir(project_root);
        paths::ensure_dir(&build_dir)?;

        let configure = self.configure_command(project_root);
        let build = self.build_command(project_root, platform);

        let configured = run_checked(&configure, verbose)?;
        let built = run_checked(&build, verbose)?;

        terminal::print_success(&format!(
            "{} build finished in {:.2}s",
            self.mode,
            (configured.duration + built.duration).as_secs_f64()
        ));
        Ok(())
    }
}

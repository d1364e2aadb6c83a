//! Platform capabilities
//!
//! The control flow never checks the operating system itself. Anything that
//! differs between Windows and everything else goes through [`Platform`].

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use super::{BuildMode, Toolset};
use crate::exec::CommandSpec;

/// Operations whose mechanics depend on the host OS
pub trait Platform {
    /// Platform name for messages
    fn name(&self) -> &'static str;

    /// Remove `dir` and everything below it
    fn remove_dir_recursive(&self, dir: &Path) -> io::Result<()>;

    /// Command that compiles the configured tree in `build_dir`
    fn build_command(
        &self,
        toolset: &Toolset,
        project_root: &Path,
        build_dir: &Path,
        mode: BuildMode,
    ) -> CommandSpec;
}

/// Linux, macOS and the other Unix-likes: Makefiles driven by `make`
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixPlatform;

impl Platform for UnixPlatform {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn remove_dir_recursive(&self, dir: &Path) -> io::Result<()> {
        fs::remove_dir_all(dir)
    }

    fn build_command(
        &self,
        toolset: &Toolset,
        project_root: &Path,
        build_dir: &Path,
        _mode: BuildMode,
    ) -> CommandSpec {
        // Makefile generators bake the build type in at configure time
        CommandSpec::new(&toolset.make).current_dir(project_root.join(build_dir))
    }
}

/// Windows: Visual Studio style multi-config trees, built through `cmake --build`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPlatform;

impl Platform for WindowsPlatform {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn remove_dir_recursive(&self, dir: &Path) -> io::Result<()> {
        // remove_dir_all refuses read-only entries on Windows
        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            if let Ok(metadata) = entry.metadata() {
                let mut permissions = metadata.permissions();
                if permissions.readonly() {
                    #[allow(clippy::permissions_set_readonly_false)]
                    permissions.set_readonly(false);
                    let _ = fs::set_permissions(entry.path(), permissions);
                }
            }
        }
        fs::remove_dir_all(dir)
    }

    fn build_command(
        &self,
        toolset: &Toolset,
        project_root: &Path,
        build_dir: &Path,
        mode: BuildMode,
    ) -> CommandSpec {
        let config = mode.to_string();
        CommandSpec::new(&toolset.cmake)
            .arg("--build")
            .arg(build_dir.to_string_lossy())
            .args(["--config", config.as_str()])
            .current_dir(project_root)
    }
}

/// Capability set for the host this binary was compiled for
pub fn current() -> &'static dyn Platform {
    if cfg!(windows) {
        return &WindowsPlatform;
    }
    &UnixPlatform
}

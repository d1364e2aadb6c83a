//! CMake configure command construction

use std::path::{Path, PathBuf};

use super::BuildMode;
use crate::exec::CommandSpec;

/// Render a boolean as a CMake option value
pub fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "ON"
    } else {
        "OFF"
    }
}

/// CMake configuration builder
#[derive(Debug, Clone)]
pub struct CMakeConfig {
    /// CMake executable
    program: String,
    /// Build directory, as passed to `-B`
    build_dir: PathBuf,
    /// Build type
    build_type: BuildMode,
    /// CMake variables (-D options)
    variables: Vec<(String, String)>,
}

impl CMakeConfig {
    /// Create a new CMake configuration
    pub fn new(program: impl Into<String>, build_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            build_dir: build_dir.into(),
            build_type: BuildMode::Release,
            variables: Vec::new(),
        }
    }

    /// Set the build type
    pub fn build_type(mut self, build_type: BuildMode) -> Self {
        self.build_type = build_type;
        self
    }

    /// Set a CMake variable
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push((name.into(), value.into()));
        self
    }

    /// Set a boolean CMake option (ON/OFF)
    pub fn option(self, name: impl Into<String>, enabled: bool) -> Self {
        self.variable(name, on_off(enabled))
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Configure command, run from `project_root`
    pub fn configure_command(&self, project_root: &Path) -> CommandSpec {
        let mut spec = CommandSpec::new(&self.program)
            .arg("-B")
            .arg(self.build_dir.to_string_lossy())
            .arg(format!("-DCMAKE_BUILD_TYPE={}", self.build_type));

        for (name, value) in &self.variables {
            spec = spec.arg(format!("-D{}={}", name, value));
        }

        spec.current_dir(project_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_command_layout() {
        let spec = CMakeConfig::new("cmake", "build")
            .build_type(BuildMode::Debug)
            .option("BUILD_TESTS", true)
            .configure_command(Path::new("/proj"));

        assert_eq!(spec.program(), "cmake");
        assert_eq!(
            spec.get_args(),
            ["-B", "build", "-DCMAKE_BUILD_TYPE=Debug", "-DBUILD_TESTS=ON"]
        );
        assert_eq!(spec.get_current_dir(), Some(Path::new("/proj")));
    }

    #[test]
    fn test_build_type_defaults_to_release() {
        let spec = CMakeConfig::new("cmake", "out").configure_command(Path::new("."));
        assert!(spec
            .get_args()
            .contains(&"-DCMAKE_BUILD_TYPE=Release".to_string()));
    }

    #[test]
    fn test_variables_keep_insertion_order() {
        let spec = CMakeConfig::new("cmake", "build")
            .variable("A", "1")
            .option("B", false)
            .configure_command(Path::new("."));
        assert_eq!(&spec.get_args()[3..], ["-DA=1", "-DB=OFF"]);
    }
}

//! Usage synopsis for `-H/--help`

use console::style;

use crate::utils::terminal::{self, Tone};

/// Flag rows: (flags, description)
const OPTIONS: &[(&str, &str)] = &[
    ("-H, --help", "Display this message [overrides all options]"),
    ("-T, --test", "Equivalent to -DBUILD_TESTS=ON [see CMakeLists.txt]"),
    ("-D, --debug", "Equivalent to -DCMAKE_BUILD_TYPE=Debug [see CMake documentation]"),
    ("-R, --release", "Equivalent to -DCMAKE_BUILD_TYPE=Release [see CMake documentation]"),
    ("-C, --clean", "FORCE CLEARING BUILD DIRECTORY"),
];

const EXTRA_OPTIONS: &[(&str, &str)] = &[
    ("-v, --verbose", "Print each external command before running it"),
    ("    --no-color", "Disable colored output"),
    ("    --cmake <PROGRAM>", "CMake executable [env: CBUILD_CMAKE, default: cmake]"),
    ("    --make <PROGRAM>", "Build driver on Unix [env: CBUILD_MAKE, default: make]"),
    ("-V, --version", "Print cbuild's own version"),
];

/// Render the usage text
pub fn usage() -> String {
    let mut out = terminal::format_status(
        Tone::Info,
        &format!("Usage: cbuild {}", style("[OPTIONS]").yellow()),
    );
    out.push('\n');
    out.push_str(&format!("{}\n", style("Options:").underlined()));
    for (flags, description) in OPTIONS.iter().chain(EXTRA_OPTIONS) {
        // pad before styling so escape codes don't skew the columns
        out.push_str(&format!(
            "  {}  {}\n",
            style(format!("{:<22}", flags)).bold(),
            description
        ));
    }
    out
}

pub fn print_usage() {
    print!("{}", usage());
}

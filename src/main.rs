//! cbuild - a thin CMake configure-and-build driver
//!
//! ## Architecture
//!
//! ```text
//! flags → help | clean | version.txt → cmake -B build → make / cmake --build
//! ```
//!
//! Every step is a blocking child process. The first failure ends the run and
//! its exit code becomes cbuild's exit code.

mod build;
mod cli;
mod commands;
mod error;
mod exec;
mod utils;
mod version;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.execute() {
        err.display_with_hints();
        std::process::exit(err.exit_code());
    }
}

//! Command implementations
//!
//! One module per terminal path of a run: usage, clean, configure-and-build.

pub mod build;
pub mod clean;
pub mod help;

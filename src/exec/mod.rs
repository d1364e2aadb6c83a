//! External process execution

pub mod subprocess;

pub use subprocess::{run_checked, CommandSpec};

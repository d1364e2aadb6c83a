//! Terminal output utilities
//!
//! Messages are tagged with a semantic [`Tone`] instead of a raw color code;
//! whether the tone actually renders as color is left to `console`, which
//! already checks for a capable terminal and honours `--no-color`.

use console::{style, StyledObject};

/// Prefix printed in front of every status line
pub const TAG: &str = "[cbuild]";

/// Semantic category of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    /// Whether messages of this tone belong on stderr
    pub fn is_diagnostic(self) -> bool {
        matches!(self, Tone::Warning | Tone::Error)
    }

    fn paint<D>(self, value: D) -> StyledObject<D> {
        match self {
            Tone::Info => style(value).magenta(),
            Tone::Success => style(value).green(),
            Tone::Warning => style(value).yellow(),
            Tone::Error => style(value).red(),
        }
    }
}

/// Format a tagged status line without printing it
pub fn format_status(tone: Tone, message: &str) -> String {
    format!("{} {}", tone.paint(TAG).bold(), message)
}

/// Print a tagged status line to the stream matching its tone
pub fn print_status(tone: Tone, message: &str) {
    let line = format_status(tone, message);
    if tone.is_diagnostic() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// Print an info message
pub fn print_info(message: &str) {
    print_status(Tone::Info, message);
}

/// Print a success message
pub fn print_success(message: &str) {
    print_status(Tone::Success, message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    print_status(Tone::Warning, message);
}

/// Turn off ANSI styling on both output streams
pub fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}

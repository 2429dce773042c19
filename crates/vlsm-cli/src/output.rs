//! Terminal output for the vlsm CLI
//!
//! Rendered reports are the only thing written to stdout by `plan`, so they
//! can be piped as CSV or JSON. Status lines, warnings and errors go to
//! stderr.

use colored::Colorize;
use console::{style, Emoji};

static DONE: Emoji = Emoji("✅", "ok");
static WARNING: Emoji = Emoji("⚠️ ", "!");
static FAILURE: Emoji = Emoji("❌", "error:");

/// Width of the label column in `field` lines
const LABEL_WIDTH: usize = 16;

/// Enable or disable colored output on both streams
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Write a rendered report to stdout, ending it with a newline
pub fn report(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

/// Confirm a completed side effect, such as a written file
pub fn done(message: &str) {
    eprintln!("{} {}", style(DONE).green(), message.green());
}

pub fn warn(message: &str) {
    eprintln!("{} {}", style(WARNING).yellow(), message.yellow());
}

pub fn error(message: &str) {
    eprintln!("{} {}", style(FAILURE).red(), message.red());
}

/// Title line above a block of `field`s
pub fn title(text: &str) {
    println!("\n{}\n", text.bold().underline());
}

/// Aligned `label: value` line
pub fn field(label: &str, value: &str) {
    let label = format!("{label}:");
    println!("{} {}", format!("{label:<LABEL_WIDTH$}").bold(), value);
}

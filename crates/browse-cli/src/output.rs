//! Severity-tagged status lines for the terminal.
//!
//! These are user-facing messages, not logs; diagnostics go through `tracing`.

use console::style;

pub fn info(message: &str) {
    println!("{} {}", style("[INFO]").blue(), message);
}

pub fn success(message: &str) {
    println!("{} {}", style("[SUCCESS]").green(), message);
}

pub fn warning(message: &str) {
    println!("{} {}", style("[WARNING]").yellow(), message);
}

pub fn error(message: &str) {
    println!("{} {}", style("[ERROR]").red(), message);
}

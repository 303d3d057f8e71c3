//! Terminal output utilities

use console::style;
use plonecli_core::CommandSpec;

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Echo the external command about to run
pub fn run_line(spec: &CommandSpec) {
    println!("{} {}", style("RUN:").bold(), spec.command_line());
}

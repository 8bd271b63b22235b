use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use crossterm::style::Stylize;

/// Print a fatal error to standard error, in red when it is a terminal.
pub fn report_error(err: &dyn Display) {
    let mut stderr = io::stderr().lock();
    let _ = if stderr.is_terminal() {
        writeln!(stderr, "{} {}", "Error:".red().bold(), err)
    } else {
        writeln!(stderr, "Error: {}", err)
    };
}

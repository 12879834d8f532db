use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_YELLOW: &str = "\x1b[33m";

/// Icons
const ICON_WARN: &str = "⚠️";

/// Print a non-fatal warning to stderr, so report output stays clean.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

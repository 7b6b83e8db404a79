//! Logging utilities with colored output and a progress line.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `elog!`, the same on stderr
//! - `ProgressLine` for redrawing a single percentage bar in place
//! - `WatchStatus` for the single-block status display of `chemsite watch`
//!
//! # Example
//!
//! ```ignore
//! log!("content"; "missing `{}`", path);
//!
//! let mut line = ProgressLine::new("loader");
//! line.draw(42);
//! line.finish();
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stderr, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

// ============================================================================
// Layout Constants
// ============================================================================
//
// Progress line format: "[loader] [████░░░░] 42%"
//                        ^------^ ^-------^ ^-^
//                        prefix   bar       percent

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;
/// Bar wrapper: " []" (space + brackets around progress bar)
const BAR_WRAPPER_LEN: usize = 3;
/// Width reserved for " 100%"
const PERCENT_LEN: usize = 5;
/// Minimum progress bar width in characters
const MIN_BAR_WIDTH: usize = 10;
/// Maximum progress bar width in characters
const MAX_BAR_WIDTH: usize = 40;

/// Calculate total prefix length for a module name.
///
/// Returns: `module.len() + 3` (for `[`, `]`, and trailing space)
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like [`log!`], but to stderr so stdout stays machine-readable.
#[macro_export]
macro_rules! elog {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::elog($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
///
/// Automatically truncates long single-line messages to fit terminal width.
#[inline]
pub fn log(module: &str, message: &str) {
    write_line(&mut stdout().lock(), module, message);
}

/// Log to stderr.
#[inline]
pub fn elog(module: &str, message: &str) {
    write_line(&mut stderr().lock(), module, message);
}

fn write_line(out: &mut impl Write, module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);
    let width = get_terminal_width() as usize;

    execute!(out, Clear(ClearType::UntilNewLine)).ok();

    if message.contains('\n') {
        writeln!(out, "{prefix} {message}").ok();
    } else {
        let max_msg_len = width.saturating_sub(calc_prefix_len(module.len()));
        writeln!(out, "{prefix} {}", truncate_str(message, max_msg_len)).ok();
    }

    out.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "content" => prefix.bright_magenta().bold(),
        "reveal" => prefix.bright_cyan().bold(),
        "loader" => prefix.bright_blue().bold(),
        "watch" => prefix.bright_green().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within `max_len` bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ============================================================================
// Progress Line
// ============================================================================

/// A single percentage bar redrawn in place on the current terminal line.
pub struct ProgressLine {
    prefix: ColoredString,
    prefix_len: usize,
    last: Option<u8>,
}

impl ProgressLine {
    pub fn new(module: &str) -> Self {
        Self {
            prefix: colorize_prefix(module, &module.to_ascii_lowercase()),
            prefix_len: calc_prefix_len(module.len()),
            last: None,
        }
    }

    /// Redraw the bar for `percent` (clamped to 100). Repeated values are skipped.
    pub fn draw(&mut self, percent: u8) {
        let percent = percent.min(100);
        if self.last == Some(percent) {
            return;
        }
        self.last = Some(percent);

        let width = get_terminal_width() as usize;
        let bar_width = bar_width(width, self.prefix_len);
        let bar = render_bar(percent, bar_width);

        let mut stdout = stdout().lock();
        execute!(stdout, Clear(ClearType::CurrentLine)).ok();
        write!(stdout, "\r{} [{bar}] {percent:>3}%", self.prefix).ok();
        stdout.flush().ok();
    }

    /// Leave the last drawn bar on screen and move to the next line.
    pub fn finish(&mut self) {
        if self.last.take().is_some() {
            let mut stdout = stdout().lock();
            writeln!(stdout).ok();
            stdout.flush().ok();
        }
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Width available for the bar itself on a terminal `width` columns wide.
fn bar_width(width: usize, prefix_len: usize) -> usize {
    let overhead = prefix_len + BAR_WRAPPER_LEN + PERCENT_LEN;
    width.saturating_sub(overhead).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}

fn render_bar(percent: u8, bar_width: usize) -> String {
    let filled = (percent as usize * bar_width) / 100;
    let empty = bar_width.saturating_sub(filled);
    "█".repeat(filled) + &"░".repeat(empty)
}

// ============================================================================
// Watch Status (single-line status with overwrite)
// ============================================================================

/// Current local time formatted as HH:MM:SS
fn now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Single-line status display for watch mode.
///
/// Each message overwrites the previous one so the terminal keeps one block
/// of status per dictionary change.
///
/// # Example
///
/// ```ignore
/// let mut status = WatchStatus::new();
/// status.success("reloaded: i18n/en.json");
/// status.unchanged("i18n/en.json");
/// status.error("reload failed", "expected `,` at line 12");
/// ```
pub struct WatchStatus {
    /// Lines of previous output to clear
    last_lines: usize,
}

impl WatchStatus {
    pub const fn new() -> Self {
        Self { last_lines: 0 }
    }

    /// Display success message (✓ prefix, green).
    pub fn success(&mut self, message: &str) {
        self.display("✓".green().to_string(), message);
    }

    /// Display unchanged message (dimmed).
    pub fn unchanged(&mut self, path: &str) {
        self.display(
            String::new(),
            &format!("unchanged: {path}").dimmed().to_string(),
        );
    }

    /// Display error message (✗ prefix, red) with optional detail.
    pub fn error(&mut self, summary: &str, detail: &str) {
        let message = if detail.is_empty() {
            summary.to_string()
        } else {
            format!("{summary}\n{detail}")
        };
        self.display("✗".red().to_string(), &message);
    }

    fn display(&mut self, symbol: String, message: &str) {
        let mut stdout = stdout().lock();

        if self.last_lines > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let lines = self.last_lines as u16;
            execute!(stdout, cursor::MoveUp(lines)).ok();
            execute!(stdout, Clear(ClearType::FromCursorDown)).ok();
        }

        let timestamp = format!("[{}]", now()).dimmed();
        let line = if symbol.is_empty() {
            format!("{timestamp} {message}")
        } else {
            format!("{timestamp} {symbol} {message}")
        };

        writeln!(stdout, "{line}").ok();
        stdout.flush().ok();

        self.last_lines = line_count(message);
    }
}

fn line_count(message: &str) -> usize {
    message.matches('\n').count() + 1
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_ends_with_message() {
        let mut buf = Vec::new();
        write_line(&mut buf, "content", "warning: `a.b` missing");
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("content"));
        assert!(text.ends_with("warning: `a.b` missing\n"));
    }

    #[test]
    fn test_calc_prefix_len() {
        // "content" -> "[content] " = 7 + 2 + 1 = 10
        assert_eq!(calc_prefix_len(7), 10);
        assert_eq!(calc_prefix_len(0), 3);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "€" is 3 bytes; cutting at 4 must back off to 3
        assert_eq!(truncate_str("€€", 4), "€");
        assert_eq!(truncate_str("a€b", 3), "a");
    }

    #[test]
    fn test_bar_width_clamped() {
        // "[loader] " = 9, overhead = 9 + 3 + 5 = 17
        assert_eq!(bar_width(120, 9), MAX_BAR_WIDTH);
        assert_eq!(bar_width(37, 9), 20);
        assert_eq!(bar_width(10, 9), MIN_BAR_WIDTH);
    }

    #[test]
    fn test_render_bar() {
        assert_eq!(render_bar(0, 10), "░".repeat(10));
        assert_eq!(render_bar(50, 10), "█".repeat(5) + &"░".repeat(5));
        assert_eq!(render_bar(100, 10), "█".repeat(10));
    }

    #[test]
    fn test_watch_status_line_count() {
        assert_eq!(WatchStatus::new().last_lines, 0);
        assert_eq!(line_count("reloaded: i18n/en.json"), 1);
        assert_eq!(line_count("reload failed\nexpected `,`\n  at line 3"), 3);
    }
}

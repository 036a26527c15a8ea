//! Terminal and display-width measurement.

use unicode_width::UnicodeWidthStr;

/// Visual width of a string in terminal columns.
///
/// Unicode-aware: CJK glyphs count as two columns, combining and zero-width
/// characters as none. Always measure the unformatted text; emphasis tokens
/// would otherwise inflate the count.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Get terminal width, defaulting to 80 if detection fails
pub fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(80)
}

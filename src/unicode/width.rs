//! Display width calculation for terminal rendering.

use unicode_width::UnicodeWidthChar;

/// Get the display width of a character in terminal columns.
///
/// ASCII printable characters are always width 1. Control characters
/// (including newline and the nil rune) and combining marks are width 0;
/// East-Asian wide glyphs are width 2.
#[inline]
#[must_use]
pub fn display_width_char(c: char) -> usize {
    if (' '..='~').contains(&c) {
        return 1;
    }
    if c < ' ' || c == '\u{7f}' {
        return 0;
    }
    UnicodeWidthChar::width(c).unwrap_or(0).min(2)
}

/// Get the display width of a string in terminal columns.
///
/// Sums per-character widths, which is how cells are laid out: one code
/// point per cell.
#[must_use]
pub fn display_width(s: &str) -> usize {
    s.chars().map(display_width_char).sum()
}

/// Check if a character is a zero-width character.
#[must_use]
pub fn is_zero_width(c: char) -> bool {
    display_width_char(c) == 0
}

/// Check if a character is wide (takes 2 columns).
#[must_use]
pub fn is_wide(c: char) -> bool {
    display_width_char(c) == 2
}

/// Check if a character separates words (whitespace other than a newline).
#[must_use]
pub fn is_space(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

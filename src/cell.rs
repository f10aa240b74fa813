//! Character and cell types: the atomic units of the grid.
//!
//! A surface is a grid of [`Cell`]s. Each cell holds one decoded code point
//! ([`TextChar`]) plus a [`Style`] and a dirty flag. The dirty flag is set on
//! every mutation and is only ever read by the cell's owner: deciding whether
//! a dirty cell actually needs to be written is the renderer's business.
//!
//! # Wide and Zero-Width Characters
//!
//! East-Asian wide glyphs report a display width of 2 and combining marks a
//! width of 0. The nil rune (`'\0'`) has width 0 and marks a cell as
//! transparent for compositing.
//!
//! # Examples
//!
//! ```
//! use celltype::{Cell, Rgba, Style, TextChar};
//!
//! let cell = Cell::new('A', Style::fg(Rgba::GREEN));
//! assert_eq!(cell.width(), 1);
//!
//! let wide = TextChar::new('漢');
//! assert_eq!(wide.width(), 2);
//! assert_eq!(wide.byte_len(), 3);
//! ```

use crate::style::Style;
use crate::unicode::{display_width_char, is_space};

/// The nil rune: a transparent cell content.
pub const NIL_RUNE: char = '\0';

/// Glyph used when truncated text is ellipsized.
pub const ELLIPSIS: char = '…';

/// One decoded code point with its display width and UTF-8 length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextChar {
    value: char,
    width: u8,
    byte_len: u8,
}

impl TextChar {
    /// Decode a character, computing its width and byte length.
    ///
    /// Whitespace control characters other than newline (tab, carriage
    /// return, vertical tab, form feed) are stored as a one-column space.
    #[must_use]
    pub fn new(value: char) -> Self {
        let value = if value != '\n' && value.is_whitespace() && display_width_char(value) == 0 {
            ' '
        } else {
            value
        };
        Self {
            value,
            width: display_width_char(value) as u8,
            byte_len: value.len_utf8() as u8,
        }
    }

    /// The nil (transparent) character.
    #[must_use]
    pub fn nil() -> Self {
        Self::new(NIL_RUNE)
    }

    /// Replace the code point, recomputing width and byte length.
    pub fn set(&mut self, value: char) {
        *self = Self::new(value);
    }

    /// The code point.
    #[must_use]
    pub const fn value(self) -> char {
        self.value
    }

    /// Visual column width: 0, 1 or 2.
    #[must_use]
    pub const fn width(self) -> usize {
        self.width as usize
    }

    /// UTF-8 encoded length in bytes (always at least 1).
    #[must_use]
    pub const fn byte_len(self) -> usize {
        self.byte_len as usize
    }

    /// Whether this is the nil rune.
    #[must_use]
    pub const fn is_nil(self) -> bool {
        self.value == NIL_RUNE
    }

    /// Whether this is a word-separating space (newline excluded).
    #[must_use]
    pub fn is_space(self) -> bool {
        is_space(self.value)
    }

    /// Whether this is a literal newline.
    #[must_use]
    pub const fn is_newline(self) -> bool {
        self.value == '\n'
    }
}

impl Default for TextChar {
    fn default() -> Self {
        Self::new(' ')
    }
}

impl From<char> for TextChar {
    fn from(value: char) -> Self {
        Self::new(value)
    }
}

/// A character plus a style plus a dirty flag.
///
/// New cells start dirty so that the first render paints them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    ch: TextChar,
    style: Style,
    dirty: bool,
}

impl Cell {
    /// Create a new (dirty) cell.
    #[must_use]
    pub fn new(ch: char, style: Style) -> Self {
        Self {
            ch: TextChar::new(ch),
            style,
            dirty: true,
        }
    }

    /// Create a transparent nil cell.
    #[must_use]
    pub fn nil(style: Style) -> Self {
        Self::new(NIL_RUNE, style)
    }

    /// The cell's character.
    #[must_use]
    pub const fn ch(&self) -> TextChar {
        self.ch
    }

    /// The cell's code point.
    #[must_use]
    pub const fn value(&self) -> char {
        self.ch.value
    }

    /// The cell's style.
    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Display width of the cell's character.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.ch.width()
    }

    /// Whether the cell has been mutated.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the cell holds the nil rune.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.ch.is_nil()
    }

    /// Replace character and style.
    pub fn set(&mut self, ch: char, style: Style) {
        self.ch.set(ch);
        self.style = style;
        self.dirty = true;
    }

    /// Replace the character, keeping the style.
    pub fn set_char(&mut self, ch: char) {
        self.ch.set(ch);
        self.dirty = true;
    }

    /// Replace the style, keeping the character.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.dirty = true;
    }

    /// Flag the cell for the next render.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Forget pending changes.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Compare character and style, ignoring the dirty flag.
    #[must_use]
    pub fn same_content(&self, other: &Cell) -> bool {
        self.ch == other.ch && self.style == other.style
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', Style::NONE)
    }
}

//! Words: maximal runs of non-space or all-space cells.

use crate::cell::{Cell, ELLIPSIS};
use crate::style::Style;
use std::fmt;

/// Number of layout columns a cell occupies.
///
/// Nil cells are glyph-less padding but still hold one column; everything
/// else occupies its display width.
#[must_use]
pub fn cell_columns(cell: &Cell) -> usize {
    if cell.is_nil() { 1 } else { cell.width() }
}

/// An ordered run of styled cells.
///
/// Whether a word is a token, a space run or padding is derived from its
/// content rather than stored. Markup may style each cell differently, so
/// every cell carries its own style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Word {
    cells: Vec<Cell>,
}

impl Word {
    /// Create an empty word.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a word from text, one cell per code point.
    #[must_use]
    pub fn with_text(text: &str, style: Style) -> Self {
        Self {
            cells: text.chars().map(|c| Cell::new(c, style)).collect(),
        }
    }

    /// Create a padding word of `columns` nil cells.
    ///
    /// Nil cells carry no glyph: drawing skips them and compositing treats
    /// them as transparent, so padding never paints over what is beneath.
    #[must_use]
    pub fn placeholder(columns: usize) -> Self {
        Self {
            cells: vec![Cell::nil(Style::NONE); columns],
        }
    }

    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Append a cell.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Append a character with a style.
    pub fn push_char(&mut self, ch: char, style: Style) {
        self.cells.push(Cell::new(ch, style));
    }

    /// The word's cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub(crate) fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Width in layout columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.iter().map(cell_columns).sum()
    }

    /// Number of code points.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the word has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether this is a space run.
    #[must_use]
    pub fn is_space(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(|c| c.ch().is_space())
    }

    /// Whether this is padding made only of nil cells.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(Cell::is_nil)
    }

    /// Number of literal newlines in the word.
    #[must_use]
    pub fn newline_count(&self) -> usize {
        self.cells.iter().filter(|c| c.ch().is_newline()).count()
    }

    /// Keep the longest prefix that fits in `max` columns.
    ///
    /// Returns `true` if anything was cut.
    pub fn truncate_columns(&mut self, max: usize) -> bool {
        let mut used = 0usize;
        let keep = self
            .cells
            .iter()
            .take_while(|cell| {
                used += cell_columns(cell);
                used <= max
            })
            .count();
        let cut = keep < self.cells.len();
        self.cells.truncate(keep);
        cut
    }

    /// Replace the last visible cell with an ellipsis, dropping any
    /// zero-width cells after it.
    ///
    /// Returns `false` if the word has no visible cell.
    pub fn ellipsize_tail(&mut self) -> bool {
        let Some(idx) = self.cells.iter().rposition(|c| cell_columns(c) > 0) else {
            return false;
        };
        self.cells.truncate(idx + 1);
        self.cells[idx].set_char(ELLIPSIS);
        true
    }

    /// Widen the word by `extra` spaces styled like its last cell.
    pub fn grow(&mut self, extra: usize) {
        let style = self.cells.last().map_or(Style::NONE, Cell::style);
        for _ in 0..extra {
            self.cells.push(Cell::new(' ', style));
        }
    }
}

impl fmt::Display for Word {
    /// Nil cells are shown as spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let ch = if cell.is_nil() { ' ' } else { cell.value() };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

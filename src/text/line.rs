//! Lines of words and the memoizing [`WordLine`] container.

use crate::cell::Cell;
use crate::style::Style;
use crate::text::layout::{LayoutKey, lay_out};
use crate::text::word::{Word, cell_columns};
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Copy, PartialEq, Eq)]
enum CellClass {
    Text,
    Space,
    Newline,
    Nil,
}

impl CellClass {
    fn of(cell: &Cell) -> Self {
        let ch = cell.ch();
        if ch.is_nil() {
            Self::Nil
        } else if ch.is_newline() {
            Self::Newline
        } else if ch.is_space() {
            Self::Space
        } else {
            Self::Text
        }
    }
}

/// An ordered sequence of words.
///
/// Appending keeps word boundaries: consecutive spaces form one space-run
/// word, consecutive non-space characters form one token word, and every
/// newline is a word of its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    words: Vec<Word>,
}

impl Line {
    /// Create an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a line from text, one cell per code point.
    #[must_use]
    pub fn from_text(text: &str, style: Style) -> Self {
        let mut line = Self::new();
        line.push_str(text, style);
        line
    }

    /// Build a line from cells, re-deriving word boundaries.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        let mut line = Self::new();
        for cell in cells {
            line.push_cell(cell);
        }
        line
    }

    /// Append a cell, extending the last word or starting a new one.
    ///
    /// Zero-width marks join the preceding word whatever its class.
    pub fn push_cell(&mut self, cell: Cell) {
        let class = CellClass::of(&cell);
        if let Some(last) = self.words.last_mut() {
            if let Some(prev) = last.cells().last() {
                let prev_class = CellClass::of(prev);
                let joins = match class {
                    CellClass::Newline => false,
                    CellClass::Text if cell.width() == 0 => prev_class != CellClass::Newline,
                    _ => class == prev_class,
                };
                if joins {
                    last.push(cell);
                    return;
                }
            }
        }
        self.words.push(Word::from_cells(vec![cell]));
    }

    /// Append a character with a style.
    pub fn append_char(&mut self, ch: char, style: Style) {
        self.push_cell(Cell::new(ch, style));
    }

    /// Append every character of `text` with a style.
    pub fn push_str(&mut self, text: &str, style: Style) {
        for ch in text.chars() {
            self.append_char(ch, style);
        }
    }

    /// Append a whole word as-is.
    pub fn push_word(&mut self, word: Word) {
        if !word.is_empty() {
            self.words.push(word);
        }
    }

    pub(crate) fn insert_word(&mut self, index: usize, word: Word) {
        self.words.insert(index, word);
    }

    /// The line's words.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> &mut Vec<Word> {
        &mut self.words
    }

    /// Iterate over every cell in order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.words.iter().flat_map(|w| w.cells().iter())
    }

    /// Width in layout columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(Word::len).sum()
    }

    /// Number of code points.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.words.iter().map(Word::char_count).sum()
    }

    /// Whether the line has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether any word is a space run.
    #[must_use]
    pub fn has_space_run(&self) -> bool {
        self.words.iter().any(Word::is_space)
    }

    /// Number of literal newlines.
    #[must_use]
    pub fn newline_count(&self) -> usize {
        self.words.iter().map(Word::newline_count).sum()
    }

    /// Split at literal newlines into physical lines, dropping the newlines.
    ///
    /// A trailing newline yields a final empty line.
    #[must_use]
    pub fn split_newlines(&self) -> Vec<Line> {
        let mut out = Vec::with_capacity(self.newline_count() + 1);
        let mut current = Line::new();
        for word in &self.words {
            if word.newline_count() == 0 {
                current.words.push(word.clone());
                continue;
            }
            for cell in word.cells() {
                if cell.ch().is_newline() {
                    out.push(std::mem::take(&mut current));
                } else {
                    current.push_cell(*cell);
                }
            }
        }
        out.push(current);
        out
    }

    /// Restyle the cells whose code point index falls in `range`.
    pub fn restyle_range(&mut self, range: Range<usize>, f: impl Fn(Style) -> Style) {
        let mut index = 0usize;
        for word in &mut self.words {
            for cell in word.cells_mut() {
                if range.contains(&index) {
                    cell.set_style(f(cell.style()));
                }
                index += 1;
            }
        }
    }

    /// Concatenate another line's words onto this one.
    pub fn extend(&mut self, other: Line) {
        for word in other.words {
            for cell in word.into_cells() {
                self.push_cell(cell);
            }
        }
    }

    /// Cells paired with the layout column each starts at.
    pub(crate) fn columns(&self) -> impl Iterator<Item = (usize, &Cell)> {
        let mut col = 0usize;
        self.cells().map(move |cell| {
            let at = col;
            col += cell_columns(cell);
            (at, cell)
        })
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct WordLineState {
    line: Line,
    cache: HashMap<LayoutKey, Vec<Line>>,
}

/// A source line that memoizes its laid-out forms.
///
/// Laying out is keyed by [`LayoutKey`]; any mutation of the source clears
/// every cached entry. Reads and writes are serialized by an internal
/// reader/writer lock, so a `WordLine` may be shared between threads.
#[derive(Debug, Default)]
pub struct WordLine {
    state: RwLock<WordLineState>,
}

impl WordLine {
    /// Create a word line from text.
    #[must_use]
    pub fn new(text: &str, style: Style) -> Self {
        Self::from_line(Line::from_text(text, style))
    }

    /// Wrap an existing line.
    #[must_use]
    pub fn from_line(line: Line) -> Self {
        Self {
            state: RwLock::new(WordLineState {
                line,
                cache: HashMap::new(),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, WordLineState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, WordLineState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate(&self, f: impl FnOnce(&mut Line)) {
        let mut state = self.write();
        f(&mut state.line);
        if !state.cache.is_empty() {
            tracing::trace!(entries = state.cache.len(), "word line cache cleared");
            state.cache.clear();
        }
    }

    /// Replace the content with plain text.
    pub fn set_text(&self, text: &str, style: Style) {
        self.mutate(|line| *line = Line::from_text(text, style));
    }

    /// Replace the content with a prepared line.
    pub fn set_line(&self, new_line: Line) {
        self.mutate(|line| *line = new_line);
    }

    /// Append plain text.
    pub fn push_str(&self, text: &str, style: Style) {
        self.mutate(|line| line.push_str(text, style));
    }

    /// Append a single character.
    pub fn append_char(&self, ch: char, style: Style) {
        self.mutate(|line| line.append_char(ch, style));
    }

    /// Append a whole word.
    pub fn push_word(&self, word: Word) {
        self.mutate(|line| line.push_word(word));
    }

    /// Restyle a range of code points.
    pub fn restyle_range(&self, range: Range<usize>, f: impl Fn(Style) -> Style) {
        self.mutate(|line| line.restyle_range(range, f));
    }

    /// Snapshot of the source line.
    #[must_use]
    pub fn line(&self) -> Line {
        self.read().line.clone()
    }

    /// Width of the source line in columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().line.len()
    }

    /// Whether the source line is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().line.is_empty()
    }

    /// Number of memoized layouts.
    #[must_use]
    pub fn cached_layouts(&self) -> usize {
        self.read().cache.len()
    }

    /// Lay out the source line, reusing a memoized result if one exists.
    #[must_use]
    pub fn make(&self, key: &LayoutKey) -> Vec<Line> {
        if let Some(lines) = self.read().cache.get(key) {
            tracing::trace!(?key, "word line cache hit");
            return lines.clone();
        }

        let mut state = self.write();
        // Another writer may have filled the entry between the locks.
        if let Some(lines) = state.cache.get(key) {
            return lines.clone();
        }
        tracing::trace!(?key, "word line cache miss");
        let lines = lay_out(&state.line, key);
        state.cache.insert(*key, lines.clone());
        lines
    }
}

impl fmt::Display for WordLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.read().line)
    }
}

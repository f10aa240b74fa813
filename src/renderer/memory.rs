//! In-memory renderer.

use crate::renderer::{Renderer, ScreenContent};
use crate::style::Style;
use crate::unicode::display_width_char;

/// A fixed-size screen held in memory, stored row by row.
///
/// Reads outside the screen return a blank cell and writes outside it are
/// dropped. Every `set_content` call is counted, in range or not, so tests
/// can assert how much a render pass wrote.
#[derive(Clone, Debug)]
pub struct MemoryRenderer {
    width: u32,
    height: u32,
    cells: Vec<ScreenContent>,
    writes: usize,
}

impl MemoryRenderer {
    /// Create a blank screen.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![ScreenContent::blank(); width as usize * height as usize],
            writes: 0,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Number of `set_content` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Reset the write counter.
    pub fn reset_writes(&mut self) {
        self.writes = 0;
    }

    /// Content at `(x, y)`, if on screen.
    #[must_use]
    pub fn content(&self, x: u32, y: u32) -> Option<&ScreenContent> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Text of row `y`; positions covered by a wide glyph are omitted.
    #[must_use]
    pub fn row_text(&self, y: u32) -> String {
        let mut out = String::new();
        let mut x = 0;
        while x < self.width {
            let Some(cell) = self.content(x, y) else {
                break;
            };
            out.push(cell.ch);
            out.extend(&cell.combining);
            x += cell.width.max(1) as u32;
        }
        out
    }

    /// All rows joined with newlines.
    #[must_use]
    pub fn screen_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Blank the screen, keeping the write counter.
    pub fn clear(&mut self) {
        self.cells.fill(ScreenContent::blank());
    }
}

impl Renderer for MemoryRenderer {
    fn get_content(&self, x: u32, y: u32) -> ScreenContent {
        self.content(x, y).cloned().unwrap_or_default()
    }

    fn set_content(&mut self, x: u32, y: u32, ch: char, combining: &[char], style: Style) {
        self.writes += 1;
        if let Some(i) = self.index(x, y) {
            self.cells[i] = ScreenContent {
                ch,
                combining: combining.to_vec(),
                style,
                width: display_width_char(ch),
            };
        }
    }
}

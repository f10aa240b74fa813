//! Column-major cell storage backing a surface.

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::geometry::Size;
use crate::style::Style;

/// A `width × height` grid of cells stored column by column.
///
/// The cell at `(x, y)` lives at index `x * height + y`. An empty buffer
/// (either dimension zero) holds no cells.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceBuffer {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    fill: char,
    style: Style,
}

impl Default for SurfaceBuffer {
    fn default() -> Self {
        Self::new(Size::default(), ' ', Style::NONE)
    }
}

impl SurfaceBuffer {
    /// Create a buffer with every cell holding `fill` in `style`.
    #[must_use]
    pub fn new(size: Size, fill: char, style: Style) -> Self {
        let mut buffer = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            fill,
            style,
        };
        buffer.rebuild(size);
        buffer
    }

    fn rebuild(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
        self.cells = if size.is_empty() {
            Vec::new()
        } else {
            vec![Cell::new(self.fill, self.style); size.area()]
        };
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Result<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(x as usize * self.height as usize + y as usize)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rune written into fresh cells.
    #[must_use]
    pub fn fill_rune(&self) -> char {
        self.fill
    }

    /// Style written into fresh cells.
    #[must_use]
    pub fn default_style(&self) -> Style {
        self.style
    }

    /// Change the rune and style used for fresh cells.
    pub fn set_defaults(&mut self, fill: char, style: Style) {
        self.fill = fill;
        self.style = style;
    }

    /// Change dimensions, refilling every cell.
    ///
    /// Resizing to the current size keeps the contents.
    pub fn resize(&mut self, size: Size) {
        if size == self.size() {
            return;
        }
        tracing::debug!(
            from_width = self.width,
            from_height = self.height,
            width = size.width,
            height = size.height,
            "resize surface buffer"
        );
        self.rebuild(size);
    }

    /// Get the cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<&Cell> {
        let idx = self.index(x.into(), y.into())?;
        Ok(&self.cells[idx])
    }

    pub(crate) fn get_mut(&mut self, x: i32, y: i32) -> Result<&mut Cell> {
        let idx = self.index(x.into(), y.into())?;
        Ok(&mut self.cells[idx])
    }

    /// Write a character and style at `(x, y)`, marking the cell dirty.
    ///
    /// A wide character also gives its style to the column(s) it spills
    /// into, so the glyph's background is continuous.
    pub fn set(&mut self, x: i32, y: i32, ch: char, style: Style) -> Result<()> {
        let cell = self.get_mut(x, y)?;
        cell.set(ch, style);
        let width = cell.width();
        for dx in 1..width {
            let nx = x.saturating_add(dx as i32);
            if let Ok(neighbor) = self.get_mut(nx, y) {
                neighbor.set_style(style);
            }
        }
        Ok(())
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, ch: char, style: Style) {
        for cell in &mut self.cells {
            cell.set(ch, style);
        }
    }

    /// Replace the contents with columns of cells.
    ///
    /// The new width is the number of columns and the new height the longest
    /// column; shorter columns are padded with fresh cells. Every cell is
    /// marked dirty.
    pub fn load_data(&mut self, columns: Vec<Vec<Cell>>) {
        let width = columns.len() as u32;
        let height = columns.iter().map(Vec::len).max().unwrap_or(0) as u32;
        self.rebuild(Size::new(width, height));
        if self.is_empty() {
            return;
        }
        let column_len = self.height as usize;
        for (x, column) in columns.into_iter().enumerate() {
            for (y, mut cell) in column.into_iter().enumerate() {
                cell.mark_dirty();
                self.cells[x * column_len + y] = cell;
            }
        }
    }

    /// Copy the contents out as columns of cells.
    #[must_use]
    pub fn data(&self) -> Vec<Vec<Cell>> {
        if self.is_empty() {
            return vec![Vec::new(); self.width as usize];
        }
        self.cells
            .chunks(self.height as usize)
            .map(<[Cell]>::to_vec)
            .collect()
    }

    /// Iterate over `(x, y, cell)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &Cell)> {
        let height = self.height.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / height) as u32, (i % height) as u32, cell))
    }

    /// Mark every cell clean.
    pub fn clear_dirty(&mut self) {
        for cell in &mut self.cells {
            cell.clear_dirty();
        }
    }

    /// Number of dirty cells.
    #[must_use]
    pub fn dirty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_dirty()).count()
    }
}

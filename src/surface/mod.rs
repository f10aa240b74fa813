//! Surfaces: positioned cell grids that can be drawn on, composited and
//! rendered.
//!
//! A [`Surface`] owns a [`SurfaceBuffer`] plus an origin expressed in the
//! coordinate system of whatever it is composited onto. All state sits
//! behind one reader/writer lock, so a surface may be shared between threads
//! and drawn on from any of them.
//!
//! # Examples
//!
//! ```
//! use celltype::{MemoryRenderer, Point, Size, Style, Surface, TextBuffer, TextLayout};
//!
//! let surface = Surface::new(Point::ZERO, Size::new(10, 1), Style::NONE);
//! let text = TextBuffer::new("hi", Style::NONE);
//! surface.draw_text(Point::ZERO, Size::new(10, 1), &text, &TextLayout::new()).unwrap();
//!
//! let mut screen = MemoryRenderer::new(10, 1);
//! surface.render(&mut screen);
//! assert_eq!(screen.row_text(0), "hi        ");
//! ```

mod buffer;
mod drawing;
mod registry;

pub use buffer::SurfaceBuffer;
pub use drawing::{BoxOptions, BoxPart, BoxRunes, Orientation};
pub use registry::{SurfaceId, SurfaceRegistry};

use crate::cell::{Cell, NIL_RUNE, TextChar};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Size};
use crate::renderer::{RenderStats, Renderer};
use crate::style::Style;
use crate::text::{TextBuffer, TextLayout};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Debug)]
struct SurfaceState {
    buffer: SurfaceBuffer,
    origin: Point,
}

/// A positioned, lockable grid of cells.
#[derive(Debug)]
pub struct Surface {
    state: RwLock<SurfaceState>,
}

impl Surface {
    /// Create a surface filled with spaces in `style`.
    #[must_use]
    pub fn new(origin: Point, size: Size, style: Style) -> Self {
        Self::with_fill(origin, size, style, ' ')
    }

    /// Create a surface filled with `fill` in `style`.
    #[must_use]
    pub fn with_fill(origin: Point, size: Size, style: Style, fill: char) -> Self {
        Self {
            state: RwLock::new(SurfaceState {
                buffer: SurfaceBuffer::new(size, fill, style),
                origin,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SurfaceState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SurfaceState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Position of the top-left cell in the parent's coordinates.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.read().origin
    }

    pub fn set_origin(&self, origin: Point) {
        self.write().origin = origin;
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.read().buffer.size()
    }

    /// Bounds in the parent's coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        let state = self.read();
        Rect::from_parts(state.origin, state.buffer.size())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().buffer.is_empty()
    }

    /// Style given to fresh cells.
    #[must_use]
    pub fn style(&self) -> Style {
        self.read().buffer.default_style()
    }

    /// Rune given to fresh cells.
    #[must_use]
    pub fn fill_rune(&self) -> char {
        self.read().buffer.fill_rune()
    }

    /// Change the rune and style used for fresh cells.
    ///
    /// Existing cells keep their content until the next resize or fill.
    pub fn set_defaults(&self, fill: char, style: Style) {
        self.write().buffer.set_defaults(fill, style);
    }

    /// Change dimensions; see [`SurfaceBuffer::resize`].
    pub fn resize(&self, size: Size) {
        self.write().buffer.resize(size);
    }

    /// Copy of the cell at `(x, y)`.
    pub fn get_content(&self, x: i32, y: i32) -> Result<Cell> {
        self.read().buffer.get(x, y).copied()
    }

    /// Write a character and style at `(x, y)`.
    pub fn set_content(&self, x: i32, y: i32, ch: char, style: Style) -> Result<()> {
        self.write().buffer.set(x, y, ch, style)
    }

    /// Replace the character at `(x, y)`, keeping its style.
    pub fn set_rune(&self, x: i32, y: i32, ch: char) -> Result<()> {
        self.write().buffer.get_mut(x, y)?.set_char(ch);
        Ok(())
    }

    /// Replace the style at `(x, y)`, keeping its character.
    pub fn set_cell_style(&self, x: i32, y: i32, style: Style) -> Result<()> {
        self.write().buffer.get_mut(x, y)?.set_style(style);
        Ok(())
    }

    /// Overwrite every cell.
    pub fn fill(&self, ch: char, style: Style) {
        self.write().buffer.fill(ch, style);
    }

    /// Replace the contents with columns of cells; see
    /// [`SurfaceBuffer::load_data`].
    pub fn load_data(&self, columns: Vec<Vec<Cell>>) {
        self.write().buffer.load_data(columns);
    }

    /// Copy the contents out as columns of cells.
    #[must_use]
    pub fn data(&self) -> Vec<Vec<Cell>> {
        self.read().buffer.data()
    }

    /// Copy of the underlying buffer.
    #[must_use]
    pub fn snapshot(&self) -> SurfaceBuffer {
        self.read().buffer.clone()
    }

    #[must_use]
    pub fn dirty_count(&self) -> usize {
        self.read().buffer.dirty_count()
    }

    /// Mark every cell clean.
    pub fn clear_dirty(&self) {
        self.write().buffer.clear_dirty();
    }

    /// Draw `text` starting at `pos`, clipped to the surface.
    ///
    /// Characters are written one per cell; no wrapping is applied.
    pub fn draw_string(&self, pos: Point, text: &str, style: Style) {
        let mut state = self.write();
        let mut x = pos.x;
        for ch in text.chars() {
            let width = TextChar::new(ch).width();
            if width == 0 {
                continue;
            }
            if state.buffer.set(x, pos.y, ch, style).is_err() && x >= 0 {
                break;
            }
            x = x.saturating_add(width as i32);
        }
    }

    /// Draw a box covering `rect`, in surface coordinates.
    ///
    /// Border cells get the border rune and style when `border` is set;
    /// otherwise, and for interior cells, the fill rune and content style
    /// are written when `fill` is set. With `overlay`, each written style
    /// keeps the background and dim attribute of the cell beneath it.
    /// Cells outside the surface are skipped.
    pub fn draw_box(&self, rect: Rect, options: &BoxOptions) {
        if rect.is_empty() {
            return;
        }
        let mut state = self.write();
        let Some(visible) = rect.intersect(&Rect::of_size(state.buffer.size())) else {
            return;
        };

        for x in visible.x..visible.right() {
            for y in visible.y..visible.bottom() {
                let part = BoxPart::classify(
                    (x - rect.x) as u32,
                    (y - rect.y) as u32,
                    rect.width,
                    rect.height,
                );
                let Some((rune, mut style)) = options.cell_for(part) else {
                    continue;
                };
                if let Ok(cell) = state.buffer.get_mut(x, y) {
                    if options.overlay {
                        style = style.overlay_onto(cell.style());
                    }
                    cell.set(rune, style);
                }
            }
        }
    }

    /// Draw a line of `length` cells from `pos`, clamped to the surface.
    pub fn draw_line(
        &self,
        pos: Point,
        length: u32,
        orientation: Orientation,
        style: Style,
        runes: &BoxRunes,
    ) {
        let (rect, rune) = match orientation {
            Orientation::Horizontal => (Rect::new(pos.x, pos.y, length, 1), runes.horizontal),
            Orientation::Vertical => (Rect::new(pos.x, pos.y, 1, length), runes.vertical),
        };
        let mut state = self.write();
        let Some(visible) = rect.intersect(&Rect::of_size(state.buffer.size())) else {
            return;
        };
        for x in visible.x..visible.right() {
            for y in visible.y..visible.bottom() {
                if let Ok(cell) = state.buffer.get_mut(x, y) {
                    cell.set(rune, style);
                }
            }
        }
    }

    pub fn draw_horizontal_line(&self, pos: Point, length: u32, style: Style, runes: &BoxRunes) {
        self.draw_line(pos, length, Orientation::Horizontal, style, runes);
    }

    pub fn draw_vertical_line(&self, pos: Point, length: u32, style: Style, runes: &BoxRunes) {
        self.draw_line(pos, length, Orientation::Vertical, style, runes);
    }

    /// Lay out `text` in a `size` area at `pos` and composite it here.
    ///
    /// The area is first erased with the layout's erase rune and fill style.
    /// Lines are wrapped to the area's width and placed vertically by the
    /// layout's alignment. Padding and zero-width cells are skipped; a wide
    /// glyph occupies two columns and is dropped if it would overhang the
    /// area.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroSize`] if `size` is empty, or if this surface is.
    pub fn draw_text(&self, pos: Point, size: Size, text: &TextBuffer, layout: &TextLayout) -> Result<()> {
        if size.is_empty() {
            return Err(Error::ZeroSize {
                width: size.width,
                height: size.height,
            });
        }

        let scratch = Surface::with_fill(self.origin() + pos, size, layout.fill_style, layout.erase);
        let lines = text.layout(&layout.key(Some(size.width as usize)));
        let start = layout.valign.start_row(lines.len(), size.height);
        tracing::trace!(lines = lines.len(), start, width = size.width, height = size.height, "draw text");

        {
            let mut state = scratch.write();
            for (row, line) in lines.iter().enumerate() {
                let y = start + row as i64;
                if y < 0 {
                    continue;
                }
                if y >= i64::from(size.height) {
                    break;
                }
                for (col, cell) in line.columns() {
                    if cell.is_nil() || cell.width() == 0 {
                        continue;
                    }
                    if col + cell.width() > size.width as usize {
                        break;
                    }
                    state.buffer.set(col as i32, y as i32, cell.value(), cell.style())?;
                }
            }
        }

        self.composite(&scratch)
    }

    /// Copy the non-nil cells of `src` onto this surface.
    ///
    /// `src` is placed at its origin minus this surface's origin; cells that
    /// land outside this surface are dropped. `src` is read under its own
    /// lock and copied out before this surface is locked for writing, so two
    /// surfaces may be composited onto each other from different threads.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroSize`] if either surface is empty.
    pub fn composite(&self, src: &Surface) -> Result<()> {
        let (src_origin, src_buffer) = {
            let state = src.read();
            if state.buffer.is_empty() {
                return Err(zero_size(&state.buffer));
            }
            (state.origin, state.buffer.clone())
        };

        let mut dst = self.write();
        if dst.buffer.is_empty() {
            return Err(zero_size(&dst.buffer));
        }
        let offset = src_origin - dst.origin;

        let bounds = Rect::of_size(dst.buffer.size());
        let mut copied = 0usize;
        for (x, y, cell) in src_buffer.iter() {
            if cell.value() == NIL_RUNE {
                continue;
            }
            let dx = offset.x.saturating_add(x as i32);
            let dy = offset.y.saturating_add(y as i32);
            if !bounds.contains(dx, dy) {
                continue;
            }
            dst.buffer.set(dx, dy, cell.value(), cell.style())?;
            copied += 1;
        }
        tracing::debug!(dx = offset.x, dy = offset.y, copied, "composite surface");
        Ok(())
    }

    /// Compare with another surface.
    ///
    /// Surfaces are equal when origin and size match and every compared cell
    /// has the same character and style. With `only_dirty`, only cells that
    /// are dirty in `other` are compared.
    #[must_use]
    pub fn equals(&self, only_dirty: bool, other: &Surface) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let theirs = other.read().clone();
        let ours = self.read();
        if ours.origin != theirs.origin || ours.buffer.size() != theirs.buffer.size() {
            return false;
        }
        ours.buffer
            .iter()
            .zip(theirs.buffer.iter())
            .filter(|(_, (_, _, other_cell))| !only_dirty || other_cell.is_dirty())
            .all(|((_, _, a), (_, _, b))| a.same_content(b))
    }

    /// Write dirty cells that differ from the screen to `renderer`.
    ///
    /// Cells are placed at origin plus position; cells at a negative
    /// absolute position and nil cells are skipped, as is the column
    /// covered by the right half of a wide glyph. Dirty flags are left
    /// as they are, so a second render with nothing changed writes nothing.
    pub fn render(&self, renderer: &mut dyn Renderer) -> RenderStats {
        let state = self.read();
        let buffer = &state.buffer;
        let mut stats = RenderStats::default();

        for y in 0..buffer.height() as i32 {
            let mut covered_until = 0i32;
            for x in 0..buffer.width() as i32 {
                if x < covered_until {
                    continue;
                }
                let Ok(cell) = buffer.get(x, y) else {
                    continue;
                };
                covered_until = x.saturating_add(cell.width() as i32);
                if !cell.is_dirty() || cell.is_nil() {
                    continue;
                }
                stats.examined += 1;

                let abs = state.origin + Point::new(x, y);
                if abs.x < 0 || abs.y < 0 {
                    stats.offscreen += 1;
                    continue;
                }
                let (ax, ay) = (abs.x as u32, abs.y as u32);
                let current = renderer.get_content(ax, ay);
                if current.ch == cell.value()
                    && current.style == cell.style()
                    && current.width == cell.width()
                {
                    continue;
                }
                renderer.set_content(ax, ay, cell.value(), &[], cell.style());
                stats.written += 1;
            }
        }

        tracing::debug!(
            examined = stats.examined,
            written = stats.written,
            offscreen = stats.offscreen,
            "render surface"
        );
        stats
    }
}

fn zero_size(buffer: &SurfaceBuffer) -> Error {
    Error::ZeroSize {
        width: buffer.width(),
        height: buffer.height(),
    }
}

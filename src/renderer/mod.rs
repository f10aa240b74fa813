//! The seam between surfaces and the terminal.
//!
//! A [`Renderer`] owns the physical screen. Surfaces never write to the
//! terminal themselves: [`Surface::render`](crate::Surface::render) asks the
//! renderer what is currently on screen and only writes cells that differ.
//!
//! [`MemoryRenderer`] is an in-memory screen for tests and headless use.

mod memory;

pub use memory::MemoryRenderer;

use crate::style::Style;

/// What a renderer reports for one screen position.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenContent {
    /// Primary code point.
    pub ch: char,
    /// Combining code points drawn on top of `ch`.
    pub combining: Vec<char>,
    pub style: Style,
    /// Display width of the cell's glyph.
    pub width: usize,
}

impl ScreenContent {
    /// A blank, unstyled position.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            ch: ' ',
            combining: Vec::new(),
            style: Style::NONE,
            width: 1,
        }
    }
}

impl Default for ScreenContent {
    fn default() -> Self {
        Self::blank()
    }
}

/// A screen that surfaces render onto.
///
/// Coordinates are absolute screen cells; callers never pass negative
/// positions. Implementations decide what to do with positions beyond their
/// extent.
pub trait Renderer {
    /// The content currently shown at `(x, y)`.
    fn get_content(&self, x: u32, y: u32) -> ScreenContent;

    /// Show `ch` (plus combining marks) at `(x, y)` in `style`.
    fn set_content(&mut self, x: u32, y: u32, ch: char, combining: &[char], style: Style);
}

/// Counters from one [`Surface::render`](crate::Surface::render) pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Dirty cells considered.
    pub examined: usize,
    /// Cells whose content differed and were written.
    pub written: usize,
    /// Dirty cells at a negative absolute position.
    pub offscreen: usize,
}

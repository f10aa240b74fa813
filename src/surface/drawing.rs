//! Box and line drawing primitives.

use crate::style::Style;

/// Runes used to draw box borders and lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxRunes {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Default for BoxRunes {
    fn default() -> Self {
        Self::single()
    }
}

impl BoxRunes {
    /// Single-line box drawing characters.
    #[must_use]
    pub const fn single() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
        }
    }

    /// Double-line box drawing characters.
    #[must_use]
    pub const fn double() -> Self {
        Self {
            top_left: '╔',
            top_right: '╗',
            bottom_left: '╚',
            bottom_right: '╝',
            horizontal: '═',
            vertical: '║',
        }
    }

    /// Rounded corner box drawing characters.
    #[must_use]
    pub const fn rounded() -> Self {
        Self {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
            horizontal: '─',
            vertical: '│',
        }
    }

    /// Heavy (bold) box drawing characters.
    #[must_use]
    pub const fn heavy() -> Self {
        Self {
            top_left: '┏',
            top_right: '┓',
            bottom_left: '┗',
            bottom_right: '┛',
            horizontal: '━',
            vertical: '┃',
        }
    }

    /// ASCII box drawing characters.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
        }
    }

    /// The rune for a border part, or `None` for the interior.
    #[must_use]
    pub const fn rune(&self, part: BoxPart) -> Option<char> {
        match part {
            BoxPart::TopLeft => Some(self.top_left),
            BoxPart::TopRight => Some(self.top_right),
            BoxPart::BottomLeft => Some(self.bottom_left),
            BoxPart::BottomRight => Some(self.bottom_right),
            BoxPart::Top | BoxPart::Bottom => Some(self.horizontal),
            BoxPart::Left | BoxPart::Right => Some(self.vertical),
            BoxPart::Interior => None,
        }
    }
}

/// Where a cell sits within a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxPart {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Interior,
}

impl BoxPart {
    /// Classify the cell at `(x, y)` relative to a `width × height` box.
    ///
    /// A one-row box is a horizontal line and a one-column box a vertical
    /// line; a 1×1 box is a single top-left corner.
    #[must_use]
    pub const fn classify(x: u32, y: u32, width: u32, height: u32) -> Self {
        let last_x = width.saturating_sub(1);
        let last_y = height.saturating_sub(1);
        if width == 1 && height == 1 {
            return Self::TopLeft;
        }
        if height == 1 {
            return Self::Top;
        }
        if width == 1 {
            return Self::Left;
        }
        match (x == 0, x == last_x, y == 0, y == last_y) {
            (true, _, true, _) => Self::TopLeft,
            (_, true, true, _) => Self::TopRight,
            (true, _, _, true) => Self::BottomLeft,
            (_, true, _, true) => Self::BottomRight,
            (_, _, true, _) => Self::Top,
            (_, _, _, true) => Self::Bottom,
            (true, _, _, _) => Self::Left,
            (_, true, _, _) => Self::Right,
            _ => Self::Interior,
        }
    }

    #[must_use]
    pub const fn is_border(self) -> bool {
        !matches!(self, Self::Interior)
    }
}

/// Options for [`Surface::draw_box`](crate::Surface::draw_box).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxOptions {
    /// Draw border runes on the outer ring.
    pub border: bool,
    /// Fill cells not covered by the border.
    pub fill: bool,
    /// Keep the background and dim attribute of the cells drawn over.
    pub overlay: bool,
    pub fill_rune: char,
    pub content_style: Style,
    pub border_style: Style,
    pub runes: BoxRunes,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            border: true,
            fill: false,
            overlay: false,
            fill_rune: ' ',
            content_style: Style::NONE,
            border_style: Style::NONE,
            runes: BoxRunes::single(),
        }
    }
}

impl BoxOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    #[must_use]
    pub fn fill_rune(mut self, rune: char) -> Self {
        self.fill_rune = rune;
        self
    }

    #[must_use]
    pub fn content_style(mut self, style: Style) -> Self {
        self.content_style = style;
        self
    }

    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    #[must_use]
    pub fn runes(mut self, runes: BoxRunes) -> Self {
        self.runes = runes;
        self
    }

    /// Rune and style for a cell, or `None` if the cell is left untouched.
    #[must_use]
    pub fn cell_for(&self, part: BoxPart) -> Option<(char, Style)> {
        if self.border {
            if let Some(rune) = self.runes.rune(part) {
                return Some((rune, self.border_style));
            }
        }
        self.fill.then_some((self.fill_rune, self.content_style))
    }
}

/// Direction of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

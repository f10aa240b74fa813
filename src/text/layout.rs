//! Layout options and the layout pipeline: mnemonic, wrap, justify.

use crate::error::Error;
use crate::style::{Style, TextAttributes};
use crate::text::justify::justify;
use crate::text::line::Line;
use crate::text::wrap::wrap;
use std::fmt;
use std::str::FromStr;

/// How a line is broken when it exceeds the available width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// No wrapping: truncate at the width.
    #[default]
    None,
    /// Wrap at character boundaries.
    Char,
    /// Wrap at word boundaries.
    Word,
    /// Wrap at word boundaries, or at characters if a line has no space.
    WordChar,
}

/// Horizontal distribution of a wrapped line within the target width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Justify {
    /// Leave lines as wrapped.
    None,
    /// Strip leading spaces.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Pad on the left by half the deficit.
    Center,
    /// Widen inter-word gaps to reach the target width.
    Fill,
}

/// Vertical placement of laid-out lines inside a drawing area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    /// First row for `lines` lines in an area of `height` rows.
    ///
    /// Negative when the text is taller than the area: middle alignment
    /// then skips `lines/2 - height/2` leading lines and bottom alignment
    /// shows the tail. Rows outside the area are clipped by the caller.
    #[must_use]
    pub fn start_row(self, lines: usize, height: u32) -> i64 {
        let lines = lines as i64;
        let height = i64::from(height);
        match self {
            Self::Top => 0,
            Self::Middle => height / 2 - lines / 2,
            Self::Bottom => height - lines,
        }
    }
}

macro_rules! option_names {
    ($ty:ty, $kind:literal, { $($variant:path => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// The option's canonical name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $($variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($variant),)+
                    _ => Err(Error::InvalidOption {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

option_names!(WrapMode, "wrap mode", {
    WrapMode::None => "none",
    WrapMode::Char => "char",
    WrapMode::Word => "word",
    WrapMode::WordChar => "word-char",
});

option_names!(Justify, "justification", {
    Justify::None => "none",
    Justify::Left => "left",
    Justify::Right => "right",
    Justify::Center => "center",
    Justify::Fill => "fill",
});

option_names!(VAlign, "vertical alignment", {
    VAlign::Top => "top",
    VAlign::Middle => "middle",
    VAlign::Bottom => "bottom",
});

/// Everything that determines the laid-out lines of a source line.
///
/// Used as the memoization key, so it must cover every input of
/// [`lay_out`] other than the line itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayoutKey {
    pub wrap: WrapMode,
    pub justify: Justify,
    /// Target width in columns; `None` disables wrapping and truncation.
    pub max_chars: Option<usize>,
    pub ellipsize: bool,
    pub mnemonic: bool,
}

impl LayoutKey {
    #[must_use]
    pub const fn new(wrap: WrapMode, justify: Justify, max_chars: Option<usize>) -> Self {
        Self {
            wrap,
            justify,
            max_chars,
            ellipsize: false,
            mnemonic: false,
        }
    }

    #[must_use]
    pub const fn with_ellipsize(mut self, ellipsize: bool) -> Self {
        self.ellipsize = ellipsize;
        self
    }

    #[must_use]
    pub const fn with_mnemonic(mut self, mnemonic: bool) -> Self {
        self.mnemonic = mnemonic;
        self
    }
}

/// Text layout configuration used when drawing a text buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextLayout {
    pub wrap: WrapMode,
    pub justify: Justify,
    pub valign: VAlign,
    /// Replace the last visible character of a truncated line with `…`.
    pub ellipsize: bool,
    /// Treat the first `_x` as a mnemonic marker and underline `x`.
    pub mnemonic: bool,
    /// Style of the background behind the text.
    pub fill_style: Style,
    /// Rune used to erase the background behind the text.
    pub erase: char,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            wrap: WrapMode::default(),
            justify: Justify::default(),
            valign: VAlign::default(),
            ellipsize: false,
            mnemonic: false,
            fill_style: Style::NONE,
            erase: ' ',
        }
    }
}

impl TextLayout {
    /// Create the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    #[must_use]
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    #[must_use]
    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    #[must_use]
    pub fn ellipsize(mut self, ellipsize: bool) -> Self {
        self.ellipsize = ellipsize;
        self
    }

    #[must_use]
    pub fn mnemonic(mut self, mnemonic: bool) -> Self {
        self.mnemonic = mnemonic;
        self
    }

    #[must_use]
    pub fn fill_style(mut self, style: Style) -> Self {
        self.fill_style = style;
        self
    }

    #[must_use]
    pub fn erase(mut self, erase: char) -> Self {
        self.erase = erase;
        self
    }

    /// The memoization key for laying out at `max_chars` columns.
    #[must_use]
    pub fn key(&self, max_chars: Option<usize>) -> LayoutKey {
        LayoutKey::new(self.wrap, self.justify, max_chars)
            .with_ellipsize(self.ellipsize)
            .with_mnemonic(self.mnemonic)
    }
}

/// Lay out a source line: mnemonic, then wrap, then justify.
#[must_use]
pub fn lay_out(line: &Line, key: &LayoutKey) -> Vec<Line> {
    let wrapped = if key.mnemonic {
        wrap(&apply_mnemonic(line), key.wrap, key.max_chars, key.ellipsize)
    } else {
        wrap(line, key.wrap, key.max_chars, key.ellipsize)
    };
    justify(wrapped, key.justify, key.max_chars)
}

/// Strip the first `_` that precedes a visible character and underline that
/// character. `__` collapses to a literal `_`.
#[must_use]
pub fn apply_mnemonic(line: &Line) -> Line {
    let cells: Vec<_> = line.cells().copied().collect();
    let mut out = Line::new();
    let mut marked = false;
    let mut i = 0;
    while i < cells.len() {
        let cell = cells[i];
        if cell.value() == '_' {
            if let Some(next) = cells.get(i + 1) {
                if next.value() == '_' {
                    out.push_cell(cell);
                    i += 2;
                    continue;
                }
                let ch = next.ch();
                if !marked && !ch.is_space() && !ch.is_newline() && !ch.is_nil() {
                    let mut underlined = *next;
                    underlined.set_style(next.style().with_attributes(TextAttributes::UNDERLINE));
                    out.push_cell(underlined);
                    marked = true;
                    i += 2;
                    continue;
                }
            }
        }
        out.push_cell(cell);
        i += 1;
    }
    out
}

//! Text styling with attributes and colors.
//!
//! - [`TextAttributes`]: Bitflags for bold, italic, underline, etc.
//! - [`Style`]: Colors plus attributes, the style carried by every cell
//! - [`StyleBuilder`]: Fluent builder for constructing styles
//!
//! # Examples
//!
//! ```
//! use celltype::{Rgba, Style, TextAttributes};
//!
//! let title = Style::fg(Rgba::WHITE).with_bold();
//! let highlight = Style::builder().bg(Rgba::BLUE).underline().build();
//!
//! // Merge styles (overlay takes precedence for colors, attributes are OR-ed)
//! let combined = title.merge(highlight);
//! assert!(combined.attributes.contains(TextAttributes::BOLD | TextAttributes::UNDERLINE));
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, italic, underline, etc.).
    ///
    /// Attributes are represented as bitflags and can be combined using
    /// bitwise OR. Not all terminals support all attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u16 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Dim/decreased intensity.
        const DIM           = 0x02;
        /// Italic (not widely supported).
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Blinking text (rarely supported).
        const BLINK         = 0x10;
        /// Swapped foreground/background.
        const INVERSE       = 0x20;
        /// Hidden/invisible text.
        const HIDDEN        = 0x40;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x80;
    }
}

/// Complete text style: optional colors plus attributes.
///
/// `None` for a color means "use terminal default" rather than a specific
/// color. Styles are small and `Copy`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Foreground color (None = terminal default).
    pub fg: Option<Rgba>,
    /// Background color (None = terminal default).
    pub bg: Option<Rgba>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a new style builder.
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Create a style with only foreground color.
    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only background color.
    #[must_use]
    pub const fn bg(color: Rgba) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only the given attributes.
    #[must_use]
    pub const fn attrs(attributes: TextAttributes) -> Self {
        Self {
            fg: None,
            bg: None,
            attributes,
        }
    }

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self::attrs(TextAttributes::BOLD)
    }

    /// Create an underline style.
    #[must_use]
    pub const fn underline() -> Self {
        Self::attrs(TextAttributes::UNDERLINE)
    }

    /// Create an inverse (swapped fg/bg) style.
    #[must_use]
    pub const fn inverse() -> Self {
        Self::attrs(TextAttributes::INVERSE)
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified attributes added.
    #[must_use]
    pub fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes | attrs,
            ..self
        }
    }

    /// Return a new style with the specified attributes removed.
    #[must_use]
    pub fn without_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes - attrs,
            ..self
        }
    }

    /// Return a new style with the attributes switched on or off.
    #[must_use]
    pub fn set_attributes(self, attrs: TextAttributes, on: bool) -> Self {
        if on {
            self.with_attributes(attrs)
        } else {
            self.without_attributes(attrs)
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    /// Return a new style with the underline attribute added.
    #[must_use]
    pub fn with_underline(self) -> Self {
        self.with_attributes(TextAttributes::UNDERLINE)
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Merge two styles, with `other` taking precedence for set colors.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }

    /// Keep this style but take the background color and dim attribute from
    /// `beneath`.
    ///
    /// Used when layering a border onto content that is already painted.
    #[must_use]
    pub fn overlay_onto(self, beneath: Self) -> Self {
        let dim = beneath.attributes.contains(TextAttributes::DIM);
        Self {
            bg: beneath.bg,
            ..self.set_attributes(TextAttributes::DIM, dim)
        }
    }
}

/// Builder for creating styles fluently.
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    /// Set foreground color.
    #[must_use]
    pub fn fg(mut self, color: Rgba) -> Self {
        self.style.fg = Some(color);
        self
    }

    /// Set background color.
    #[must_use]
    pub fn bg(mut self, color: Rgba) -> Self {
        self.style.bg = Some(color);
        self
    }

    /// Add bold attribute.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.attributes |= TextAttributes::BOLD;
        self
    }

    /// Add dim attribute.
    #[must_use]
    pub fn dim(mut self) -> Self {
        self.style.attributes |= TextAttributes::DIM;
        self
    }

    /// Add italic attribute.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.style.attributes |= TextAttributes::ITALIC;
        self
    }

    /// Add underline attribute.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.style.attributes |= TextAttributes::UNDERLINE;
        self
    }

    /// Add inverse attribute.
    #[must_use]
    pub fn inverse(mut self) -> Self {
        self.style.attributes |= TextAttributes::INVERSE;
        self
    }

    /// Add strikethrough attribute.
    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.style.attributes |= TextAttributes::STRIKETHROUGH;
        self
    }

    /// Build the final style.
    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}

//! Styled text content with selection, ready to be laid out and drawn.

use crate::error::Result;
use crate::style::Style;
use crate::text::layout::LayoutKey;
use crate::text::line::{Line, WordLine};
use crate::text::markup::parse_markup;
use std::ops::Range;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Source {
    Plain(String),
    Markup(String),
}

/// Text to be drawn on a surface.
///
/// Holds plain text or markup together with a base style and an optional
/// selection. The styled result is kept in a [`WordLine`] so repeated layouts
/// at the same width are served from its cache.
///
/// # Examples
///
/// ```
/// use celltype::{Style, TextBuffer, TextLayout, WrapMode};
///
/// let buffer = TextBuffer::new("hello world", Style::NONE);
/// let layout = TextLayout::new().wrap(WrapMode::Word);
/// let lines = buffer.layout(&layout.key(Some(5)));
/// assert_eq!(lines.len(), 2);
/// ```
#[derive(Debug)]
pub struct TextBuffer {
    source: Source,
    style: Style,
    selection: Option<Range<usize>>,
    selection_style: Style,
    display: WordLine,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("", Style::NONE)
    }
}

impl TextBuffer {
    /// Create a buffer holding plain text.
    #[must_use]
    pub fn new(text: &str, style: Style) -> Self {
        Self {
            source: Source::Plain(text.to_string()),
            style,
            selection: None,
            selection_style: Style::inverse(),
            display: WordLine::new(text, style),
        }
    }

    /// Create a buffer from markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Markup`](crate::Error::Markup) if the markup is
    /// malformed.
    pub fn from_markup(markup: &str, style: Style) -> Result<Self> {
        let line = parse_markup(markup, style)?;
        Ok(Self {
            source: Source::Markup(markup.to_string()),
            style,
            selection: None,
            selection_style: Style::inverse(),
            display: WordLine::from_line(line),
        })
    }

    /// Replace the content with plain text.
    pub fn set_text(&mut self, text: &str) {
        self.source = Source::Plain(text.to_string());
        self.rebuild_quiet();
    }

    /// Replace the content with markup.
    ///
    /// On error the previous content is kept.
    pub fn set_markup(&mut self, markup: &str) -> Result<()> {
        let line = parse_markup(markup, self.style)?;
        self.source = Source::Markup(markup.to_string());
        self.publish(line);
        Ok(())
    }

    /// Change the base style.
    pub fn set_style(&mut self, style: Style) -> Result<()> {
        let previous = std::mem::replace(&mut self.style, style);
        if let Err(err) = self.rebuild() {
            self.style = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Select a range of code points; the selection is highlighted when drawn.
    pub fn select(&mut self, range: Range<usize>) {
        if self.selection.as_ref() == Some(&range) {
            return;
        }
        self.selection = (!range.is_empty()).then_some(range);
        self.rebuild_quiet();
    }

    /// Remove the selection.
    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.rebuild_quiet();
        }
    }

    /// Set the style merged over selected cells.
    pub fn set_selection_style(&mut self, style: Style) {
        self.selection_style = style;
        if self.selection.is_some() {
            self.rebuild_quiet();
        }
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// The base style.
    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// Whether the content came from markup.
    #[must_use]
    pub fn is_markup(&self) -> bool {
        matches!(self.source, Source::Markup(_))
    }

    /// The displayed text, without markup.
    #[must_use]
    pub fn text(&self) -> String {
        self.display.to_string()
    }

    /// Number of code points in the displayed text.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.display.line().char_count()
    }

    /// Whether there is no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    /// The styled line behind the buffer.
    #[must_use]
    pub fn word_line(&self) -> &WordLine {
        &self.display
    }

    /// Lay out the text, reusing a cached result when possible.
    #[must_use]
    pub fn layout(&self, key: &LayoutKey) -> Vec<Line> {
        self.display.make(key)
    }

    fn rebuild(&mut self) -> Result<()> {
        let line = match &self.source {
            Source::Plain(text) => Line::from_text(text, self.style),
            Source::Markup(markup) => parse_markup(markup, self.style)?,
        };
        self.publish(line);
        Ok(())
    }

    /// Rebuild from a source that has already parsed once under the current
    /// style, so this cannot fail.
    fn rebuild_quiet(&mut self) {
        if let Err(err) = self.rebuild() {
            tracing::debug!(%err, "text buffer rebuild failed");
        }
    }

    fn publish(&mut self, mut line: Line) {
        if let Some(range) = &self.selection {
            let highlight = self.selection_style;
            line.restyle_range(range.clone(), |style| style.merge(highlight));
        }
        self.display.set_line(line);
    }
}

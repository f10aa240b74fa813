//! Styled text: words, lines, markup and layout.
//!
//! Text flows through a fixed pipeline before it reaches a surface:
//!
//! 1. Plain text or markup becomes a [`Line`] of styled [`Word`]s.
//! 2. The line is wrapped to the target width ([`WrapMode`]).
//! 3. Each wrapped line is justified ([`Justify`]).
//!
//! [`WordLine`] memoizes step 2 and 3 per [`LayoutKey`], and [`TextBuffer`]
//! adds selection highlighting on top.
//!
//! # Examples
//!
//! ```
//! use celltype::{Justify, LayoutKey, Line, Style, WrapMode};
//! use celltype::text::lay_out;
//!
//! let line = Line::from_text("one two three", Style::NONE);
//! let key = LayoutKey::new(WrapMode::Word, Justify::Right, Some(8));
//! let lines: Vec<String> = lay_out(&line, &key).iter().map(ToString::to_string).collect();
//! assert_eq!(lines, vec!["one two", "   three"]);
//! ```

mod buffer;
mod justify;
mod layout;
mod line;
pub mod markup;
mod word;
mod wrap;

pub use buffer::TextBuffer;
pub use justify::justify;
pub use layout::{Justify, LayoutKey, TextLayout, VAlign, WrapMode, apply_mnemonic, lay_out};
pub use line::{Line, WordLine};
pub use markup::{MarkupError, MarkupParser, parse_markup};
pub use word::{Word, cell_columns};
pub use wrap::{truncate, wrap};

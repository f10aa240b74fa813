//! `celltype` - text layout and surface compositing for terminal cells
//!
//! Styled text (plain or markup) is laid out into lines with wrapping,
//! justification, ellipsis and mnemonic handling, drawn onto positioned cell
//! grids ([`Surface`]), composited surface onto surface, and finally rendered
//! to a [`Renderer`] with only the cells that changed being written.
//!
//! # Examples
//!
//! ```
//! use celltype::{
//!     BoxOptions, Justify, MemoryRenderer, Point, Rect, Size, Style, Surface, TextBuffer,
//!     TextLayout, WrapMode,
//! };
//!
//! let screen_surface = Surface::new(Point::ZERO, Size::new(12, 4), Style::NONE);
//! screen_surface.draw_box(Rect::new(0, 0, 12, 4), &BoxOptions::new());
//!
//! let label = TextBuffer::from_markup("<b>Hello</b> there", Style::NONE).unwrap();
//! let layout = TextLayout::new().wrap(WrapMode::Word).justify(Justify::Center);
//! screen_surface
//!     .draw_text(Point::new(1, 1), Size::new(10, 2), &label, &layout)
//!     .unwrap();
//!
//! let mut screen = MemoryRenderer::new(12, 4);
//! screen_surface.render(&mut screen);
//! assert_eq!(screen.row_text(0), "┌──────────┐");
//! assert_eq!(screen.row_text(1), "│  Hello   │");
//! assert_eq!(screen.row_text(2), "│  there   │");
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for color math
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow SurfaceBuffer, TextBuffer etc
#![allow(clippy::struct_excessive_bools)] // Layout and box options are flag sets
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::needless_collect)] // Collect for assertions is clear
#![allow(clippy::len_without_is_empty)] // Word::len is a column width

pub mod cell;
pub mod color;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod style;
pub mod surface;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use cell::{Cell, TextChar};
pub use color::Rgba;
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use style::{Style, StyleBuilder, TextAttributes};

// Re-export surface and renderer types
pub use renderer::{MemoryRenderer, RenderStats, Renderer, ScreenContent};
pub use surface::{
    BoxOptions, BoxPart, BoxRunes, Orientation, Surface, SurfaceBuffer, SurfaceId, SurfaceRegistry,
};

// Re-export text types
pub use text::{
    Justify, LayoutKey, Line, MarkupError, TextBuffer, TextLayout, VAlign, Word, WordLine, WrapMode,
    parse_markup,
};

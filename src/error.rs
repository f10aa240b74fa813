//! Error types for celltype.

use crate::text::markup::MarkupError;
use thiserror::Error;

/// Result type alias for celltype operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for celltype operations.
///
/// Every variant is recoverable: a failed call leaves the target surface or
/// line exactly as it was before the call.
#[derive(Debug, Error)]
pub enum Error {
    /// Coordinate outside the buffer extent.
    #[error("position ({x}, {y}) out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
    /// Operation attempted on a surface with a zero width or height.
    #[error("zero-sized surface: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
    /// Malformed markup; the whole parse was aborted.
    #[error("markup error: {0}")]
    Markup(#[from] MarkupError),
    /// Unknown name for a layout option (wrap, justify or alignment).
    #[error("invalid {kind}: {value:?}")]
    InvalidOption { kind: &'static str, value: String },
}

impl Error {
    pub(crate) fn out_of_bounds(x: impl Into<i64>, y: impl Into<i64>, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x: x.into(),
            y: y.into(),
            width,
            height,
        }
    }
}

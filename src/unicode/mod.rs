//! Unicode utilities for display width and word classification.

mod width;

pub use width::{display_width, display_width_char, is_space, is_wide, is_zero_width};

//! Small shared utilities.

mod color_mode;

pub use color_mode::ColorMode;

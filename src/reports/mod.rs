//! Report generation in various formats.

mod console;
mod operators;
mod summary;

pub use console::generate as generate_table;
pub use operators::generate as generate_operators;
pub use summary::generate as generate_summary;

use crate::misc::ColorMode;
use std::io::{IsTerminal, stdout};

pub(crate) fn color_enabled(color_mode: ColorMode) -> bool {
    matches!(color_mode, ColorMode::Always) || (matches!(color_mode, ColorMode::Auto) && stdout().is_terminal())
}

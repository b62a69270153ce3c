//! Total formatting functions over partial benchmark data.
//!
//! Every function in this module is defined for all inputs, including missing
//! and unparseable ones. Failure never escapes as an error; it degrades to the
//! [`NO_DATA`] sentinel so a malformed fixture entry costs one cell, never the
//! whole table.

mod bytes;
mod cost;
mod duration;
mod glyph;
mod mean;
mod percent;

pub use bytes::{humanize_bytes, humanize_kb_str};
pub use cost::{duration_secs_of, estimate_cost, format_two_significant_digits};
pub use duration::humanize_seconds_str;
pub use glyph::{FAILURE_GLYPH, SUCCESS_GLYPH, bool_glyph, is_truthy};
pub use mean::mean_average;
pub use percent::percent_of_total;

/// Sentinel display value used in place of missing or unparseable data.
pub const NO_DATA: &str = "No data";

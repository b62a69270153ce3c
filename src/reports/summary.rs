//! Renders per-framework metric means as a horizontal bar chart.

use crate::Result;
use crate::format::NO_DATA;
use crate::misc::ColorMode;
use crate::resolve::SeriesPoint;
use core::fmt::Write;
use owo_colors::OwoColorize;

const BAR_WIDTH: usize = 40;

pub fn generate<W: Write>(title: &str, unit: &str, points: &[SeriesPoint], color: ColorMode, writer: &mut W) -> Result<()> {
    let enabled = super::color_enabled(color);

    if enabled {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }

    if points.is_empty() {
        writeln!(writer, "{NO_DATA}")?;
        return Ok(());
    }

    let name_width = points.iter().map(|point| point.framework.chars().count()).max().unwrap_or(0);
    let max_mean = points.iter().map(|point| point.mean).fold(0.0_f64, f64::max);

    for point in points {
        let bar = bar_of(point.mean, max_mean);
        writeln!(writer, "{:<name_width$}  {bar} {:.2}{unit}", point.framework, point.mean)?;
    }
    Ok(())
}

/// Bar length scaled against the largest mean; any present value gets at
/// least one block so it stays visible.
fn bar_of(mean: f64, max_mean: f64) -> String {
    if max_mean <= 0.0 || !mean.is_finite() {
        return "▏".to_string();
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "Ratio is clamped to the bar width"
    )]
    let length = ((mean / max_mean * BAR_WIDTH as f64).round() as usize).clamp(1, BAR_WIDTH);
    "█".repeat(length)
}

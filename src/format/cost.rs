use super::NO_DATA;
use serde_json::Value;

/// Round to exactly two significant digits, independent of magnitude.
///
/// The digit count adapts with `floor(log10(|x|))` so `0.0034` keeps both of
/// its digits and `1234` rounds to `1200`; a fixed `{:.2}` would get both
/// wrong. Zero and non-finite input yield [`NO_DATA`].
#[must_use]
pub fn format_two_significant_digits(num: f64) -> String {
    if !num.is_finite() || num == 0.0 {
        return NO_DATA.to_string();
    }

    let magnitude = num.abs().log10().floor();
    let scale = 10_f64.powf(magnitude - 1.0);
    let rounded = (num / scale).round() * scale;

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "Clamped non-negative and small")]
    let decimals = (1.0 - magnitude).max(0.0) as usize;
    format!("{rounded:.decimals$}")
}

/// Estimated run cost in dollars for a duration on a machine billed hourly.
#[must_use]
pub fn estimate_cost(duration_secs: f64, hourly_cost: f64) -> String {
    let total = duration_secs * (hourly_cost / 3600.0);
    if !total.is_finite() || total <= 0.0 {
        return NO_DATA.to_string();
    }
    format!("${}", format_two_significant_digits(total))
}

/// Seconds from a duration-like JSON value: a `{secs, nanos}` object, a
/// `"<n>s"` string, or a bare number of seconds.
#[must_use]
pub fn duration_secs_of(val: &Value) -> Option<f64> {
    match val {
        Value::Object(obj) => {
            let secs = obj.get("secs").and_then(Value::as_f64)?;
            let nanos = obj.get("nanos").and_then(Value::as_f64).unwrap_or(0.0);
            Some(secs + nanos / 1e9)
        }
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('s').parse().ok(),
        _ => None,
    }
}

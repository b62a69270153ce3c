use super::NO_DATA;

/// Unit spans for decomposed durations, largest first.
const LADDER: [(&str, u64); 5] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

/// Humanize a duration expressed as a `"<n>s"` string.
///
/// Durations below one second render as milliseconds; everything else is
/// decomposed into calendar-style units. Unparseable input yields [`NO_DATA`].
#[must_use]
pub fn humanize_seconds_str(time: &str) -> String {
    let Ok(secs) = time.trim().trim_end_matches('s').parse::<f64>() else {
        return NO_DATA.to_string();
    };
    if !secs.is_finite() || secs < 0.0 {
        return NO_DATA.to_string();
    }
    if secs < 1.0 {
        return format!("{:.2}ms", secs * 1000.0);
    }
    decompose(secs)
}

fn decompose(secs: f64) -> String {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "Checked finite and non-negative by the caller")]
    let mut remaining = secs as u64;
    let mut parts = Vec::new();

    for (unit, span) in LADDER {
        let count = remaining / span;
        if count > 0 {
            parts.push(pluralize(count, unit));
            remaining %= span;
        }
    }

    if remaining > 0 || parts.is_empty() {
        parts.push(pluralize(remaining, "second"));
    }

    parts.join(" ")
}

fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_second_is_milliseconds() {
        assert_eq!(humanize_seconds_str("0.5s"), "500.00ms");
        assert_eq!(humanize_seconds_str("0.001s"), "1.00ms");
    }

    #[test]
    fn test_whole_seconds() {
        assert_eq!(humanize_seconds_str("1s"), "1 second");
        assert_eq!(humanize_seconds_str("45s"), "45 seconds");
    }

    #[test]
    fn test_decomposed_units() {
        assert_eq!(humanize_seconds_str("90s"), "1 minute 30 seconds");
        assert_eq!(humanize_seconds_str("3600s"), "1 hour");
        assert_eq!(humanize_seconds_str("90061s"), "1 day 1 hour 1 minute 1 second");
    }

    #[test]
    fn test_unparseable_is_sentinel() {
        assert_eq!(humanize_seconds_str("soon"), NO_DATA);
        assert_eq!(humanize_seconds_str(""), NO_DATA);
    }
}

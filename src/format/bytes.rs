use super::NO_DATA;

/// Unit ladder for binary (1024) magnitude steps.
const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

/// Humanize a raw byte count using binary magnitude steps.
///
/// Returns [`NO_DATA`] for negative or non-finite input; `0` renders as
/// `"0.00 B"`.
#[must_use]
pub fn humanize_bytes(bytes: f64) -> String {
    if !bytes.is_finite() || bytes < 0.0 {
        return NO_DATA.to_string();
    }

    #[expect(clippy::cast_possible_truncation, reason = "Magnitude step is clamped to the unit ladder")]
    let step = if bytes == 0.0 {
        0
    } else {
        (bytes.ln() / 1024_f64.ln()).floor().clamp(0.0, (UNITS.len() - 1) as f64) as i32
    };

    #[expect(clippy::cast_sign_loss, reason = "Clamped to a non-negative range above")]
    let unit = UNITS[step as usize];
    format!("{:.2} {unit}", bytes / 1024_f64.powi(step))
}

/// Humanize a kilobyte quantity expressed as a `"<n>kb"` string.
#[must_use]
pub fn humanize_kb_str(size: &str) -> String {
    let Ok(kb) = size.trim().trim_end_matches("kb").parse::<f64>() else {
        return NO_DATA.to_string();
    };
    humanize_bytes(kb * 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(humanize_bytes(0.0), "0.00 B");
    }

    #[test]
    fn test_kilobyte_boundary() {
        assert_eq!(humanize_bytes(1536.0), "1.50 kB");
        assert_eq!(humanize_bytes(1023.0), "1023.00 B");
        assert_eq!(humanize_bytes(1024.0), "1.00 kB");
    }

    #[test]
    fn test_larger_magnitudes() {
        assert_eq!(humanize_bytes(1024.0 * 1024.0), "1.00 MB");
        assert_eq!(humanize_bytes(2.5 * 1024.0 * 1024.0 * 1024.0), "2.50 GB");
    }

    #[test]
    fn test_ladder_top_is_clamped() {
        // Beyond TB the ladder ends; stays in TB rather than indexing past it.
        assert_eq!(humanize_bytes(1024_f64.powi(5) * 3.0), "3072.00 TB");
    }

    #[test]
    fn test_kb_string() {
        assert_eq!(humanize_kb_str("1.5kb"), "1.50 kB");
        assert_eq!(humanize_kb_str("0kb"), "0.00 B");
        assert_eq!(humanize_kb_str("431616kb"), "421.50 MB");
    }

    #[test]
    fn test_unparseable_is_sentinel() {
        assert_eq!(humanize_kb_str("fastkb"), NO_DATA);
        assert_eq!(humanize_kb_str(""), NO_DATA);
        assert_eq!(humanize_bytes(f64::NAN), NO_DATA);
        assert_eq!(humanize_bytes(-1.0), NO_DATA);
    }
}

use super::NO_DATA;

/// Arithmetic mean of unit-suffixed numeric samples, re-rendered through a
/// humanizer.
///
/// The suffix is stripped from every element before averaging and reattached
/// before the humanizer runs. An empty slice or any unparseable element yields
/// [`NO_DATA`]; the input is never mutated and the result is independent of
/// element order.
#[must_use]
pub fn mean_average(samples: &[String], suffix: &str, humanize: fn(&str) -> String) -> String {
    if samples.is_empty() {
        return NO_DATA.to_string();
    }

    let mut sum = 0.0;
    for sample in samples {
        let stripped = if suffix.is_empty() {
            sample.trim()
        } else {
            sample.trim().trim_end_matches(suffix)
        };
        let Ok(value) = stripped.parse::<f64>() else {
            return NO_DATA.to_string();
        };
        sum += value;
    }

    #[expect(clippy::cast_precision_loss, reason = "Sample counts are tiny")]
    let mean = sum / samples.len() as f64;
    humanize(&format!("{mean}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{humanize_kb_str, humanize_seconds_str};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_mean_of_kb_samples() {
        let samples = strings(&["2kb", "4kb"]);
        assert_eq!(mean_average(&samples, "kb", humanize_kb_str), "3.00 kB");
    }

    #[test]
    fn test_order_independent() {
        let forward = strings(&["1kb", "2kb", "9kb"]);
        let backward = strings(&["9kb", "2kb", "1kb"]);
        assert_eq!(
            mean_average(&forward, "kb", humanize_kb_str),
            mean_average(&backward, "kb", humanize_kb_str)
        );
    }

    #[test]
    fn test_empty_is_sentinel_not_zero() {
        assert_eq!(mean_average(&[], "kb", humanize_kb_str), NO_DATA);
    }

    #[test]
    fn test_unparseable_element_is_sentinel() {
        let samples = strings(&["2kb", "outlier"]);
        assert_eq!(mean_average(&samples, "kb", humanize_kb_str), NO_DATA);
    }

    #[test]
    fn test_time_samples() {
        let samples = strings(&["4s", "6s"]);
        assert_eq!(mean_average(&samples, "s", humanize_seconds_str), "5 seconds");
    }

    #[test]
    fn test_input_not_mutated() {
        let samples = strings(&["2kb", "4kb"]);
        let before = samples.clone();
        let _ = mean_average(&samples, "kb", humanize_kb_str);
        assert_eq!(samples, before);
    }
}

use super::NO_DATA;
use serde_json::Value;

/// Percentage of supported entries out of the total, rounded to whole percent.
///
/// The input is expected to carry `supported` and `total` arrays; a missing or
/// non-array entry counts as length zero. A zero-length total yields
/// [`NO_DATA`] rather than a division artifact.
#[must_use]
pub fn percent_of_total(val: Option<&Value>) -> String {
    let Some(obj) = val.and_then(Value::as_object) else {
        return NO_DATA.to_string();
    };

    let len_of = |key: &str| obj.get(key).and_then(Value::as_array).map_or(0, Vec::len);
    let supported = len_of("supported");
    let total = len_of("total");

    if total == 0 {
        return NO_DATA.to_string();
    }

    #[expect(clippy::cast_precision_loss, reason = "Operator counts are tiny")]
    let ratio = supported as f64 / total as f64;
    format!("{:.0}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_half_supported() {
        let val = json!({"supported": [1, 2], "total": [1, 2, 3, 4]});
        assert_eq!(percent_of_total(Some(&val)), "50%");
    }

    #[test]
    fn test_rounded_to_whole_percent() {
        let val = json!({"supported": [1], "total": [1, 2, 3]});
        assert_eq!(percent_of_total(Some(&val)), "33%");
    }

    #[test]
    fn test_empty_total_is_sentinel() {
        let val = json!({"supported": [], "total": []});
        assert_eq!(percent_of_total(Some(&val)), NO_DATA);
    }

    #[test]
    fn test_missing_supported_counts_as_zero() {
        let val = json!({"total": [1, 2]});
        assert_eq!(percent_of_total(Some(&val)), "0%");
    }

    #[test]
    fn test_absent_value_is_sentinel() {
        assert_eq!(percent_of_total(None), NO_DATA);
        assert_eq!(percent_of_total(Some(&json!("n/a"))), NO_DATA);
    }
}

//! The formatter registry: named, total value-formatting functions applied to
//! resolved cell values.

use crate::format::{
    NO_DATA, bool_glyph, duration_secs_of, estimate_cost, humanize_bytes, humanize_kb_str, humanize_seconds_str, mean_average,
    percent_of_total,
};
use crate::fixtures::hourly_cost;
use crate::resolve::ActiveVars;
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

/// Named formatters a descriptor can reference.
///
/// Every formatter is total: defined for absent, malformed, and well-formed
/// input alike, degrading to the `No data` sentinel instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FormatterKind {
    /// Truthy/falsy to a fixed success/failure glyph.
    Bool,

    /// Mean of size samples (`"<n>kb"` strings or raw byte counts), humanized.
    MeanSize,

    /// Mean of `"<n>s"` duration samples, humanized.
    MeanTime,

    /// Mean of `"<n>s"` duration samples, priced with the selected machine's
    /// hourly cost.
    MeanCost,

    /// `supported`/`total` operator lists as a whole percentage.
    PercentOfTotal,

    /// A single benchmark measurement: a `{secs, nanos}` duration rendered as
    /// seconds or cost depending on the view, anything else as bytes.
    Metric,
}

impl FormatterKind {
    /// Apply this formatter to a resolved raw value.
    #[must_use]
    pub fn apply(self, raw: Option<&Value>, vars: &ActiveVars) -> String {
        match self {
            Self::Bool => bool_glyph(raw).to_string(),
            Self::MeanSize => mean_size(raw),
            Self::MeanTime => mean_time(raw, humanize_seconds_str),
            Self::MeanCost => mean_cost(raw, vars),
            Self::PercentOfTotal => percent_of_total(raw),
            Self::Metric => metric(raw, vars),
        }
    }
}

/// Size samples arrive as `"<n>kb"` strings or raw byte counts; normalize
/// everything to kilobytes before averaging.
fn mean_size(raw: Option<&Value>) -> String {
    let Some(samples) = raw.and_then(Value::as_array) else {
        return NO_DATA.to_string();
    };

    let normalized: Vec<String> = samples
        .iter()
        .map(|sample| match sample {
            Value::String(s) => format!("{}kb", s.trim().trim_end_matches("kb")),
            Value::Number(n) => n.as_f64().map_or_else(|| "?kb".to_string(), |bytes| format!("{}kb", bytes / 1024.0)),
            _ => "?kb".to_string(),
        })
        .collect();

    mean_average(&normalized, "kb", humanize_kb_str)
}

fn mean_time(raw: Option<&Value>, humanize: fn(&str) -> String) -> String {
    let Some(samples) = raw.and_then(Value::as_array) else {
        return NO_DATA.to_string();
    };

    let samples: Vec<String> = samples
        .iter()
        .map(|sample| sample.as_str().unwrap_or("?").to_string())
        .collect();

    mean_average(&samples, "s", humanize)
}

fn mean_cost(raw: Option<&Value>, vars: &ActiveVars) -> String {
    let Some(hourly) = vars.machine().and_then(hourly_cost) else {
        return NO_DATA.to_string();
    };

    // Averaged by hand: the shared mean helper renders through a humanizer,
    // but cost needs the numeric mean.
    let Some(samples) = raw.and_then(Value::as_array) else {
        return NO_DATA.to_string();
    };
    if samples.is_empty() {
        return NO_DATA.to_string();
    }

    let mut sum = 0.0;
    for sample in samples {
        let Some(secs) = sample.as_str().and_then(|s| s.trim().trim_end_matches('s').parse::<f64>().ok()) else {
            return NO_DATA.to_string();
        };
        sum += secs;
    }

    #[expect(clippy::cast_precision_loss, reason = "Sample counts are tiny")]
    let mean_secs = sum / samples.len() as f64;
    estimate_cost(mean_secs, hourly)
}

fn metric(raw: Option<&Value>, vars: &ActiveVars) -> String {
    let Some(val) = raw else {
        return NO_DATA.to_string();
    };

    if vars.cost() {
        let Some((secs, hourly)) = duration_secs_of(val).zip(vars.machine().and_then(hourly_cost)) else {
            return NO_DATA.to_string();
        };
        return estimate_cost(secs, hourly);
    }

    if vars.metric() == Some("time") {
        return duration_secs_of(val).map_or_else(|| NO_DATA.to_string(), |secs| format!("{secs:.2}s"));
    }

    val.as_f64().map_or_else(|| NO_DATA.to_string(), humanize_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mean_size_mixed_shapes() {
        // kb strings and raw byte counts normalize to the same unit.
        let strings = json!(["2kb", "4kb"]);
        let bytes = json!([2048, 4096]);
        assert_eq!(FormatterKind::MeanSize.apply(Some(&strings), &ActiveVars::new()), "3.00 kB");
        assert_eq!(FormatterKind::MeanSize.apply(Some(&bytes), &ActiveVars::new()), "3.00 kB");
    }

    #[test]
    fn test_mean_time() {
        let samples = json!(["4s", "6s"]);
        assert_eq!(FormatterKind::MeanTime.apply(Some(&samples), &ActiveVars::new()), "5 seconds");
    }

    #[test]
    fn test_mean_cost_uses_machine_table() {
        let samples = json!(["3600s"]);
        let vars = ActiveVars::new().with_machine("64CPU-128GB-None");
        assert_eq!(FormatterKind::MeanCost.apply(Some(&samples), &vars), "$2.2");

        let unknown = ActiveVars::new().with_machine("unknown-machine");
        assert_eq!(FormatterKind::MeanCost.apply(Some(&samples), &unknown), NO_DATA);
    }

    #[test]
    fn test_metric_time_view() {
        let val = json!({"secs": 4, "nanos": 500_000_000});
        let vars = ActiveVars::new().with_metric("time");
        assert_eq!(FormatterKind::Metric.apply(Some(&val), &vars), "4.50s");
    }

    #[test]
    fn test_metric_cost_view() {
        let val = json!({"secs": 3600, "nanos": 0});
        let vars = ActiveVars::new()
            .with_machine("16CPU-64GB-CUDA")
            .with_metric("time")
            .with_cost(true);
        assert_eq!(FormatterKind::Metric.apply(Some(&val), &vars), "$4.0");
    }

    #[test]
    fn test_metric_byte_view() {
        let val = json!(1_536_000);
        let vars = ActiveVars::new().with_metric("metrics.peak_memory_usage_bytes");
        assert_eq!(FormatterKind::Metric.apply(Some(&val), &vars), "1.46 MB");
    }

    #[test]
    fn test_absent_is_sentinel() {
        let vars = ActiveVars::new();
        assert_eq!(FormatterKind::MeanSize.apply(None, &vars), NO_DATA);
        assert_eq!(FormatterKind::Metric.apply(None, &vars), NO_DATA);
    }

    #[test]
    fn test_names_round_trip() {
        assert_eq!(FormatterKind::MeanSize.to_string(), "mean-size");
        assert_eq!("percent-of-total".parse::<FormatterKind>().unwrap(), FormatterKind::PercentOfTotal);
    }
}

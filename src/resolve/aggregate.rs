//! Mean aggregation of benchmark samples for chart-style summaries.

use crate::fixtures::BenchmarkData;
use serde_json::Value;

/// One framework's aggregated value in a summary series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub framework: String,
    pub mean: f64,
}

/// Per-framework means for one (machine, model, metric) triple.
///
/// Frameworks without samples for the metric are omitted, not zeroed; a
/// framework with any unparseable sample is omitted as well.
#[must_use]
pub fn series(benchmarks: &BenchmarkData, machine: &str, model: &str, metric: &str) -> Vec<SeriesPoint> {
    let Some(frameworks) = benchmarks
        .tree()
        .get(machine)
        .and_then(|models| models.get(model))
        .and_then(Value::as_object)
    else {
        return Vec::new();
    };

    frameworks
        .iter()
        .filter_map(|(framework, metrics)| {
            let samples = metrics.get(metric)?.as_array()?;
            let mean = mean_of(samples)?;
            Some(SeriesPoint {
                framework: framework.clone(),
                mean,
            })
        })
        .collect()
}

fn mean_of(samples: &[Value]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    for sample in samples {
        sum += sample_value(sample)?;
    }

    #[expect(clippy::cast_precision_loss, reason = "Sample counts are tiny")]
    let mean = sum / samples.len() as f64;
    Some(mean)
}

/// Numeric value of one sample, stripping the `kb`/`s` unit suffixes.
fn sample_value(sample: &Value) -> Option<f64> {
    match sample {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches("kb").trim_end_matches('s').parse().ok(),
        _ => None,
    }
}

//! The nested benchmark metrics tree.
//!
//! The tree is keyed machine profile → model → framework id → metric name →
//! array of unit-suffixed sample strings. A `meta` branch at the top level
//! carries the fixture's freshness stamp and is split off at load time.

use crate::Result;
use chrono::{DateTime, Utc};
use ohno::{IntoAppError, bail};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Reserved branch holding the dot-product probe results; it sits beside the
/// model branches but is not a model.
pub const DOT_PRODUCT_BRANCH: &str = "dot-product";

/// Fixture metadata carried on the `meta` branch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// The benchmark runs for all machine profiles.
#[derive(Debug, Clone)]
pub struct BenchmarkData {
    meta: Meta,
    tree: Value,
}

impl BenchmarkData {
    /// Split a raw fixture document into metadata and the machine-keyed tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a JSON object or the `meta`
    /// branch is malformed.
    pub fn from_value(mut root: Value) -> Result<Self> {
        let Some(map) = root.as_object_mut() else {
            bail!("benchmark fixture must be a JSON object");
        };

        let meta = match map.remove("meta") {
            Some(value) => serde_json::from_value(value).into_app_err("malformed benchmark meta")?,
            None => Meta::default(),
        };

        Ok(Self { meta, tree: root })
    }

    /// Load benchmark runs from a fixture file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_value(super::load(path, "benchmarks")?)
    }

    /// Parse benchmark runs from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(super::parse(json, "benchmarks")?)
    }

    #[must_use]
    pub const fn meta(&self) -> &Meta {
        &self.meta
    }

    /// The machine-keyed tree, rooted where a `metrics` path segment lands.
    #[must_use]
    pub const fn tree(&self) -> &Value {
        &self.tree
    }

    /// Machine profile names present in the fixture.
    #[must_use]
    pub fn machines(&self) -> Vec<&str> {
        self.tree.as_object().map_or_else(Vec::new, |map| map.keys().map(String::as_str).collect())
    }

    /// Model names, unioned across all machine branches.
    #[must_use]
    pub fn models(&self) -> Vec<String> {
        let Some(machines) = self.tree.as_object() else {
            return Vec::new();
        };

        let mut models: Vec<String> = machines
            .values()
            .filter_map(Value::as_object)
            .flat_map(|models| models.keys())
            .filter(|name| *name != DOT_PRODUCT_BRANCH)
            .cloned()
            .collect();
        models.sort_unstable();
        models.dedup();
        models
    }

    /// Metric names recorded for a model, unioned across machines and
    /// frameworks.
    #[must_use]
    pub fn metrics_for(&self, model: &str) -> Vec<String> {
        let Some(machines) = self.tree.as_object() else {
            return Vec::new();
        };

        let mut metrics: Vec<String> = machines
            .values()
            .filter_map(|models| models.get(model))
            .filter_map(Value::as_object)
            .flat_map(serde_json::Map::values)
            .filter_map(Value::as_object)
            .flat_map(serde_json::Map::keys)
            .cloned()
            .collect();
        metrics.sort_unstable();
        metrics.dedup();
        metrics
    }

    /// Age of the fixture relative to `now`, e.g. `"updated 3 days ago"`.
    #[must_use]
    pub fn updated_age(&self, now: DateTime<Utc>) -> Option<String> {
        let stamp = self.meta.last_updated?;
        let age = now.signed_duration_since(stamp);
        if age.num_seconds() < 0 {
            return Some("updated just now".to_string());
        }

        let (count, unit) = if age.num_days() >= 365 {
            (age.num_days() / 365, "year")
        } else if age.num_days() >= 30 {
            (age.num_days() / 30, "month")
        } else if age.num_days() >= 1 {
            (age.num_days(), "day")
        } else if age.num_hours() >= 1 {
            (age.num_hours(), "hour")
        } else {
            (age.num_minutes().max(1), "minute")
        };

        let plural = if count == 1 { "" } else { "s" };
        Some(format!("updated {count} {unit}{plural} ago"))
    }
}

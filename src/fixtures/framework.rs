//! Subject records for the comparison tables.

use crate::Result;
use ohno::IntoAppError;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// The typed header fields every framework record must carry.
#[derive(Debug, Clone, Deserialize)]
struct Header {
    id: String,
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    label: Option<String>,
}

/// One framework being compared.
///
/// The typed fields cover what the table headers need; the full nested record
/// is kept as raw JSON so descriptor paths can reach arbitrary fields.
#[derive(Debug, Clone)]
pub struct Framework {
    pub id: String,
    pub name: String,
    pub url: String,
    pub version: String,

    /// A disabled framework could not be benchmarked; its cells render as
    /// `Unknown` and `label` explains why.
    pub disabled: bool,
    pub label: Option<String>,

    doc: Value,
}

impl Framework {
    /// Build a framework from its raw fixture record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is missing `id` or `name`.
    pub fn from_value(doc: Value) -> Result<Self> {
        let header: Header = serde_json::from_value(doc.clone()).into_app_err("malformed framework record")?;
        Ok(Self {
            id: header.id,
            name: header.name,
            url: header.url,
            version: header.version,
            disabled: header.disabled,
            label: header.label,
            doc,
        })
    }

    /// The full nested record, used for path resolution.
    #[must_use]
    pub const fn doc(&self) -> &Value {
        &self.doc
    }
}

/// Load framework records from a fixture file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Framework>> {
    let records: Vec<Value> = super::load(path, "frameworks")?;
    records.into_iter().map(Framework::from_value).collect()
}

/// Parse framework records from a JSON string.
pub fn from_json(json: &str) -> Result<Vec<Framework>> {
    let records: Vec<Value> = super::parse(json, "frameworks")?;
    records.into_iter().map(Framework::from_value).collect()
}

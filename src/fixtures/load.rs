//! Deserialization utilities for fixture documents.

use crate::Result;
use ohno::IntoAppError;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const LOG_TARGET: &str = "fixtures";

/// Load a fixture document from a file
pub fn load<T>(path: impl AsRef<Path>, context: impl AsRef<str>) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let path = path.as_ref();
    let ctx = context.as_ref();

    let file = File::open(path).into_app_err_with(|| format!("unable to open fixture '{}'", path.display()))?;
    let reader = BufReader::new(file);
    let data = serde_json::from_reader(reader).into_app_err_with(|| format!("unable to parse fixture '{}'", path.display()))?;

    if !ctx.is_empty() {
        log::debug!(target: LOG_TARGET, "Loaded {ctx} from '{}'", path.display());
    }

    Ok(data)
}

/// Parse a fixture document from an embedded JSON string
pub fn parse<T>(json: &str, context: impl AsRef<str>) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let ctx = context.as_ref();
    let data = serde_json::from_str(json).into_app_err_with(|| format!("unable to parse embedded {ctx} fixture"))?;

    if !ctx.is_empty() {
        log::debug!(target: LOG_TARGET, "Loaded embedded {ctx}");
    }

    Ok(data)
}

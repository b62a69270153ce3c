//! Templated path resolution against a subject document.

use super::ActiveVars;
use serde_json::Value;

/// Resolves dot-delimited path templates against one subject at a time.
///
/// Absence is represented structurally: any missing segment, variable, or
/// branch yields `None`, never an error, so a sparse fixture degrades one
/// cell at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver<'a> {
    benchmarks: Option<&'a Value>,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self { benchmarks: None }
    }

    /// A resolver whose `metrics` path segment re-roots at the benchmark tree.
    #[must_use]
    pub const fn with_benchmarks(benchmarks: &'a Value) -> Self {
        Self {
            benchmarks: Some(benchmarks),
        }
    }

    /// Walk `path` from `subject`, substituting `$name` segments from `vars`.
    ///
    /// A substituted value is first tried as a single literal key (machine
    /// identifiers contain `-` but name one key); only on a miss is it split
    /// on `.` and walked segment by segment. A literal `metrics` segment
    /// re-roots the walk at the benchmark tree. An empty path yields `None`,
    /// which is what header-only rows rely on.
    #[must_use]
    pub fn resolve(&self, subject: &'a Value, path: &str, vars: &ActiveVars) -> Option<&'a Value> {
        if path.is_empty() {
            return None;
        }

        let mut current = subject;
        for part in path.split('.') {
            if part == "metrics" {
                current = self.benchmarks?;
                continue;
            }

            current = if let Some(name) = part.strip_prefix('$') {
                descend(current, vars.lookup(name)?)?
            } else {
                child(current, part)?
            };
        }

        Some(current)
    }
}

/// Walk one substituted key: the whole value as a literal key first, then as a
/// dotted sub-path.
fn descend<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    if let Some(found) = child(value, key) {
        return Some(found);
    }
    if key.contains('.') {
        return key.split('.').try_fold(value, child);
    }
    None
}

fn child<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}

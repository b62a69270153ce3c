//! Flattens a descriptor schema against the subject records into display
//! cells.

use super::{ActiveVars, Resolver};
use crate::fixtures::Framework;
use crate::schema::PropertyDescriptor;
use serde_json::Value;

/// Cell text shown for frameworks that could not be benchmarked.
const UNKNOWN: &str = "Unknown";

/// Which icon a side note carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Info,
    Warning,
}

/// One table column: a framework header.
#[derive(Debug, Clone)]
pub struct ColumnHead {
    pub name: String,
    pub url: String,
    pub disabled: bool,
    pub label: Option<String>,
}

/// One display cell, with any side notes keyed to its framework.
#[derive(Debug, Clone)]
pub struct Cell {
    pub display: String,
    pub info: Option<String>,
    pub annotation: Option<String>,
}

impl Cell {
    /// The note to surface, info taking precedence for icon selection. Both
    /// note texts stay available on the cell itself.
    #[must_use]
    pub fn note(&self) -> Option<(NoteKind, &str)> {
        if let Some(info) = &self.info {
            return Some((NoteKind::Info, info));
        }
        self.annotation.as_deref().map(|text| (NoteKind::Warning, text))
    }
}

/// One table row: a section header or a resolved property.
#[derive(Debug, Clone)]
pub struct Row {
    pub name: String,
    pub indent: u8,
    pub is_header: bool,
    pub cells: Vec<Cell>,
}

/// The resolved 2D table.
#[derive(Debug, Clone)]
pub struct TableMatrix {
    pub columns: Vec<ColumnHead>,
    pub rows: Vec<Row>,
}

/// Resolve every (descriptor, subject) pair into a display cell.
///
/// Never fails: missing data degrades to the formatter's sentinel or an empty
/// cell, and disabled subjects render as [`UNKNOWN`].
#[must_use]
pub fn build(
    descriptors: &[PropertyDescriptor],
    frameworks: &[Framework],
    resolver: &Resolver<'_>,
    vars: &ActiveVars,
) -> TableMatrix {
    let columns = frameworks
        .iter()
        .map(|fw| ColumnHead {
            name: fw.name.clone(),
            url: fw.url.clone(),
            disabled: fw.disabled,
            label: fw.label.clone(),
        })
        .collect();

    let rows = descriptors
        .iter()
        .map(|descriptor| build_row(descriptor, frameworks, resolver, vars))
        .collect();

    TableMatrix { columns, rows }
}

fn build_row(
    descriptor: &PropertyDescriptor,
    frameworks: &[Framework],
    resolver: &Resolver<'_>,
    vars: &ActiveVars,
) -> Row {
    let Some(path) = descriptor.path.as_deref() else {
        return Row {
            name: descriptor.name.clone(),
            indent: descriptor.indent,
            is_header: true,
            cells: Vec::new(),
        };
    };

    let cells = frameworks
        .iter()
        .map(|fw| {
            let cell_vars = vars.for_framework(&fw.id);
            let raw = resolver.resolve(fw.doc(), path, &cell_vars);

            let display = if fw.disabled {
                UNKNOWN.to_string()
            } else {
                descriptor
                    .formatter
                    .map_or_else(|| display_raw(raw), |formatter| formatter.apply(raw, &cell_vars))
            };

            Cell {
                display,
                info: descriptor.info.get(&fw.id).cloned(),
                annotation: descriptor.annotations.get(&fw.id).cloned(),
            }
        })
        .collect();

    Row {
        name: descriptor.name.clone(),
        indent: descriptor.indent,
        is_header: false,
        cells,
    }
}

/// Default rendering for unformatted values. Absent values and objects render
/// empty; arrays join their scalar elements.
fn display_raw(val: Option<&Value>) -> String {
    match val {
        None | Some(Value::Null | Value::Object(_)) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| display_raw(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormatterKind;
    use serde_json::json;

    fn frameworks() -> Vec<Framework> {
        vec![
            Framework::from_value(json!({
                "id": "ezkl",
                "name": "EZKL",
                "url": "https://ezkl.xyz",
                "sourceLanguage": "Rust",
                "gpu": {"cuda": true}
            }))
            .unwrap(),
            Framework::from_value(json!({
                "id": "zkml",
                "name": "zkML",
                "disabled": true,
                "label": "Not yet benchmarked.",
                "sourceLanguage": "Python"
            }))
            .unwrap(),
        ]
    }

    #[test]
    fn test_header_row_has_no_cells() {
        let descriptors = vec![PropertyDescriptor::header("API Support")];
        let matrix = build(&descriptors, &frameworks(), &Resolver::new(), &ActiveVars::new());
        assert!(matrix.rows[0].is_header);
        assert!(matrix.rows[0].cells.is_empty());
    }

    #[test]
    fn test_raw_and_formatted_cells() {
        let descriptors = vec![
            PropertyDescriptor::new("Source Language", "sourceLanguage"),
            PropertyDescriptor::new("CUDA", "gpu.cuda").with_formatter(FormatterKind::Bool),
        ];
        let matrix = build(&descriptors, &frameworks(), &Resolver::new(), &ActiveVars::new());

        assert_eq!(matrix.rows[0].cells[0].display, "Rust");
        assert_eq!(matrix.rows[1].cells[0].display, "✅");
    }

    #[test]
    fn test_disabled_framework_renders_unknown() {
        let descriptors = vec![PropertyDescriptor::new("Source Language", "sourceLanguage")];
        let matrix = build(&descriptors, &frameworks(), &Resolver::new(), &ActiveVars::new());

        assert_eq!(matrix.rows[0].cells[1].display, UNKNOWN);
        assert_eq!(matrix.columns[1].label.as_deref(), Some("Not yet benchmarked."));
    }

    #[test]
    fn test_framework_variable_bound_per_subject() {
        let benchmarks = json!({
            "16CPU-64GB-CUDA": {"mnist": {"ezkl": {"proofSize": ["2kb", "4kb"]}}}
        });
        let resolver = Resolver::with_benchmarks(&benchmarks);
        let descriptors = vec![
            PropertyDescriptor::new("Proof Size", "metrics.16CPU-64GB-CUDA.mnist.$framework.proofSize")
                .with_formatter(FormatterKind::MeanSize),
        ];
        let vars = ActiveVars::new().with_machine("16CPU-64GB-CUDA");
        let matrix = build(&descriptors, &frameworks(), &resolver, &vars);

        assert_eq!(matrix.rows[0].cells[0].display, "3.00 kB");
    }

    #[test]
    fn test_info_takes_precedence_but_both_are_exposed() {
        let descriptors = vec![
            PropertyDescriptor::new("Source Language", "sourceLanguage")
                .with_info("ezkl", "info text")
                .with_annotation("ezkl", "annotation text"),
        ];
        let matrix = build(&descriptors, &frameworks(), &Resolver::new(), &ActiveVars::new());

        let cell = &matrix.rows[0].cells[0];
        assert_eq!(cell.note(), Some((NoteKind::Info, "info text")));
        assert_eq!(cell.annotation.as_deref(), Some("annotation text"));
    }

    #[test]
    fn test_missing_data_with_formatter_is_sentinel() {
        let descriptors = vec![PropertyDescriptor::new("Operators", "operatorSupport").with_formatter(FormatterKind::PercentOfTotal)];
        let matrix = build(&descriptors, &frameworks(), &Resolver::new(), &ActiveVars::new());
        assert_eq!(matrix.rows[0].cells[0].display, crate::format::NO_DATA);
    }

    #[test]
    fn test_missing_data_without_formatter_is_empty() {
        let descriptors = vec![PropertyDescriptor::new("Audit", "audit")];
        let matrix = build(&descriptors, &frameworks(), &Resolver::new(), &ActiveVars::new());
        assert_eq!(matrix.rows[0].cells[0].display, "");
    }
}

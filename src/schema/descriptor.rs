//! Property descriptors: one entry per table row.

use super::FormatterKind;
use std::collections::BTreeMap;

/// Describes one table row: its label, data path, and formatting.
///
/// A descriptor without a path is a section header and produces no
/// per-subject values. Path segments may be literal field names or `$name`
/// placeholders substituted from the active variables at resolution time.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub name: String,
    pub description: Option<String>,
    pub path: Option<String>,
    pub indent: u8,

    /// Warning side notes keyed by subject id.
    pub annotations: BTreeMap<String, String>,

    /// Informational side notes keyed by subject id; these win over
    /// annotations for icon selection.
    pub info: BTreeMap<String, String>,

    pub formatter: Option<FormatterKind>,
}

impl PropertyDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            path: Some(path.into()),
            indent: 0,
            annotations: BTreeMap::new(),
            info: BTreeMap::new(),
            formatter: None,
        }
    }

    /// A section header row with no per-subject values.
    #[must_use]
    pub fn header(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            path: None,
            indent: 0,
            annotations: BTreeMap::new(),
            info: BTreeMap::new(),
            formatter: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub const fn with_formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        let _ = self.annotations.insert(id.into(), text.into());
        self
    }

    #[must_use]
    pub fn with_info(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        let _ = self.info.insert(id.into(), text.into());
        self
    }

    #[must_use]
    pub const fn is_header(&self) -> bool {
        self.path.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_has_no_path() {
        let header = PropertyDescriptor::header("GPU Acceleration");
        assert!(header.is_header());
        assert_eq!(header.path, None);
    }

    #[test]
    fn test_builder() {
        let descriptor = PropertyDescriptor::new("CUDA", "gpu.cuda")
            .with_indent(4)
            .with_formatter(FormatterKind::Bool)
            .with_annotation("riscZero", "CUDA builds are not benchmarked here.");

        assert!(!descriptor.is_header());
        assert_eq!(descriptor.indent, 4);
        assert_eq!(descriptor.formatter, Some(FormatterKind::Bool));
        assert!(descriptor.annotations.contains_key("riscZero"));
    }
}

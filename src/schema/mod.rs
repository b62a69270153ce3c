//! The declarative table schema: property descriptors, the formatter
//! registry, and the built-in comparison tables.

mod descriptor;
mod formatter;
mod tables;

pub use descriptor::PropertyDescriptor;
pub use formatter::FormatterKind;
pub use tables::{benchmark_properties, feature_properties};

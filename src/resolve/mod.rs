//! The table resolver: templated path resolution, benchmark path re-targeting,
//! and the row/matrix builder that flattens a descriptor schema against the
//! subject records.

mod aggregate;
mod matrix;
mod path;
mod rewrite;
mod vars;

pub use aggregate::{SeriesPoint, series};
pub use matrix::{Cell, ColumnHead, NoteKind, Row, TableMatrix, build};
pub use path::Resolver;
pub use rewrite::{retarget, retarget_all};
pub use vars::ActiveVars;

//! Static JSON fixture data: subject records, the benchmark metrics tree, and
//! machine profiles.
//!
//! Fixtures are loaded once at startup and treated as immutable for the
//! process lifetime. The resolver tolerates missing branches anywhere in the
//! benchmark tree, so a sparse or partially broken fixture degrades individual
//! cells rather than the whole table.

mod benchmarks;
mod framework;
mod load;
mod machine;

pub use benchmarks::{BenchmarkData, DOT_PRODUCT_BRANCH, Meta};
pub use framework::{Framework, from_json as frameworks_from_json, load_file as load_frameworks};
pub use load::{load, parse};
pub use machine::{Accelerator, MachineSpec, hourly_cost};

/// Framework records bundled at build time, used when no fixture path is given.
pub const DEFAULT_FRAMEWORKS_JSON: &str = include_str!("../../fixtures/frameworks.json");

/// Benchmark runs bundled at build time, used when no fixture path is given.
pub const DEFAULT_BENCHMARKS_JSON: &str = include_str!("../../fixtures/benchmarks.json");

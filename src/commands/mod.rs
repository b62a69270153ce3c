//! Subcommand implementations for the `zkml-bench` binary.

mod bench;
mod common;
mod features;
mod machines;
mod operators;
mod summary;

pub use bench::{BenchArgs, show_bench};
pub use features::{FeaturesArgs, show_features};
pub use machines::{MachinesArgs, show_machines};
pub use operators::{OperatorsArgs, show_operators};
pub use summary::{SummaryArgs, show_summary};

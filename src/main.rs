//! A tool to compare zero-knowledge machine learning frameworks.
//!
//! # Overview
//!
//! `zkml-bench` renders feature and benchmark comparison tables for zkML
//! frameworks from static JSON fixtures. The fixtures describe each framework
//! (languages, proving system, operator support) and the benchmark runs
//! recorded per machine profile, model, and framework.
//!
//! # Quick Start
//!
//! Show the feature comparison table:
//!
//! ```bash
//! zkml-bench features
//! ```
//!
//! Show benchmark results for the default machine profile:
//!
//! ```bash
//! zkml-bench bench
//! ```
//!
//! # Basic Usage
//!
//! **Pick a machine profile:**
//! ```bash
//! zkml-bench bench --machine 64CPU-128GB-None
//! ```
//!
//! **Switch the dot-product probe measurement:**
//! ```bash
//! zkml-bench bench --metric memory
//! zkml-bench bench --metric file-size
//! zkml-bench bench --metric cost
//! ```
//!
//! **Aggregate one metric across frameworks as a bar chart:**
//! ```bash
//! zkml-bench summary --metric proving-time --model mnist
//! ```
//!
//! **List operator support per framework:**
//! ```bash
//! zkml-bench operators
//! ```
//!
//! **List the machine profiles present in the fixture:**
//! ```bash
//! zkml-bench machines
//! ```
//!
//! # Fixtures
//!
//! Both fixtures ship embedded in the binary. To compare against your own
//! data, point at local files:
//!
//! ```bash
//! zkml-bench bench --frameworks frameworks.json --benchmarks benchmarks.json
//! ```
//!
//! The framework fixture is an array of framework records; descriptor paths
//! reach into arbitrary nested fields, so records may carry any extra data.
//! The benchmark fixture is keyed machine profile, then model, then framework
//! id, then metric name, with an optional top-level `meta.lastUpdated` stamp
//! that is shown as a freshness footer.
//!
//! # Output
//!
//! Color is used when writing to a terminal; control it with
//! `--color always|never|auto`. Cells with side notes carry numbered markers
//! resolved in a footnote list under the table.

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use zkml_bench::Result;

mod commands;

use crate::commands::{
    BenchArgs, FeaturesArgs, MachinesArgs, OperatorsArgs, SummaryArgs, show_bench, show_features, show_machines, show_operators,
    show_summary,
};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "zkml-bench", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: BenchSubcommand,
}

#[derive(Subcommand, Debug)]
enum BenchSubcommand {
    /// Show the framework feature comparison table
    Features(FeaturesArgs),
    /// Show benchmark results for one machine profile
    Bench(BenchArgs),
    /// Summarize one metric across frameworks as a bar chart
    Summary(SummaryArgs),
    /// Show per-framework operator support
    Operators(OperatorsArgs),
    /// List benchmark machine profiles and their hourly cost
    Machines(MachinesArgs),
}

fn main() -> Result<()> {
    match &Cli::parse().command {
        BenchSubcommand::Features(args) => show_features(args),
        BenchSubcommand::Bench(args) => show_bench(args),
        BenchSubcommand::Summary(args) => show_summary(args),
        BenchSubcommand::Operators(args) => show_operators(args),
        BenchSubcommand::Machines(args) => show_machines(args),
    }
}

//! The bench subcommand: benchmark results for one machine profile.

use super::common::{Common, CommonArgs};
use chrono::Utc;
use clap::{Args, ValueEnum};
use ohno::bail;
use zkml_bench::Result;
use zkml_bench::resolve::{ActiveVars, Resolver, build, retarget_all};
use zkml_bench::reports::generate_table;
use zkml_bench::schema::benchmark_properties;

/// Which measurement the dot-product probe row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BenchMetric {
    /// Wall-clock proving time
    Time,
    /// Peak memory used while proving
    Memory,
    /// Size of the generated proof artifact
    FileSize,
    /// Estimated proving cost on the selected machine
    Cost,
}

impl BenchMetric {
    /// The measurement sub-path inside one probe result entry.
    const fn prop(self) -> &'static str {
        match self {
            Self::Time | Self::Cost => "time",
            Self::Memory => "metrics.peak_memory_usage_bytes",
            Self::FileSize => "metrics.file_size_bytes",
        }
    }

    const fn is_cost(self) -> bool {
        matches!(self, Self::Cost)
    }
}

/// Benchmark run method, for fixtures that record runs per method
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Python,
    Rust,
}

impl Method {
    const fn key(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Rust => "rust",
        }
    }
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Machine profile to show [default: first profile in the fixture]
    #[arg(long, value_name = "NAME")]
    pub machine: Option<String>,

    /// Which measurement the dot-product probe shows
    #[arg(long, value_name = "METRIC", default_value = "time")]
    pub metric: BenchMetric,

    /// Run method to select, where the fixture records one per method
    #[arg(long, value_name = "METHOD")]
    pub method: Option<Method>,
}

pub fn show_bench(args: &BenchArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let machines = common.benchmarks.machines();
    let Some(first) = machines.first().copied() else {
        bail!("benchmark fixture contains no machine profiles");
    };

    let machine = match &args.machine {
        Some(name) if machines.contains(&name.as_str()) => name.as_str(),
        Some(name) => bail!("unknown machine profile '{name}', expected one of: {}", machines.join(", ")),
        None => first,
    };

    let descriptors = benchmark_properties(&common.benchmarks);
    let descriptors = retarget_all(&descriptors, machine, &machines);

    let mut vars = ActiveVars::new()
        .with_machine(machine)
        .with_metric(args.metric.prop())
        .with_cost(args.metric.is_cost());
    if let Some(method) = args.method {
        vars = vars.with_method(method.key());
    }

    let resolver = Resolver::with_benchmarks(common.benchmarks.tree());
    let matrix = build(&descriptors, &common.frameworks, &resolver, &vars);

    let footer = common.benchmarks.updated_age(Utc::now());
    let mut output = String::new();
    generate_table(&matrix, common.color(), footer.as_deref(), &mut output)?;
    print!("{output}");
    Ok(())
}

//! The summary subcommand: per-framework metric means as a bar chart.

use super::common::{Common, CommonArgs};
use clap::{Args, ValueEnum};
use ohno::bail;
use zkml_bench::Result;
use zkml_bench::resolve::series;
use zkml_bench::reports::generate_summary;

/// Which recorded metric to aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryMetric {
    /// Mean proof generation time
    ProvingTime,
    /// Mean proof artifact size
    ProofSize,
    /// Mean peak memory while proving
    MemoryUsage,
}

impl SummaryMetric {
    const fn key(self) -> &'static str {
        match self {
            Self::ProvingTime => "provingTime",
            Self::ProofSize => "proofSize",
            Self::MemoryUsage => "memoryUsage",
        }
    }

    const fn unit(self) -> &'static str {
        match self {
            Self::ProvingTime => "s",
            Self::ProofSize | Self::MemoryUsage => "kb",
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::ProvingTime => "Mean proving time",
            Self::ProofSize => "Mean proof size",
            Self::MemoryUsage => "Mean memory usage",
        }
    }
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Machine profile to summarize [default: first profile in the fixture]
    #[arg(long, value_name = "NAME")]
    pub machine: Option<String>,

    /// Model to summarize [default: first model in the fixture]
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Metric to aggregate
    #[arg(long, value_name = "METRIC", default_value = "proving-time")]
    pub metric: SummaryMetric,
}

pub fn show_summary(args: &SummaryArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let machines = common.benchmarks.machines();
    let Some(first_machine) = machines.first().copied() else {
        bail!("benchmark fixture contains no machine profiles");
    };
    let machine = match &args.machine {
        Some(name) if machines.contains(&name.as_str()) => name.as_str(),
        Some(name) => bail!("unknown machine profile '{name}', expected one of: {}", machines.join(", ")),
        None => first_machine,
    };

    let models = common.benchmarks.models();
    let Some(first_model) = models.first() else {
        bail!("benchmark fixture contains no models");
    };
    let model = match &args.model {
        Some(name) if models.contains(name) => name.as_str(),
        Some(name) => bail!("unknown model '{name}', expected one of: {}", models.join(", ")),
        None => first_model.as_str(),
    };

    let points = series(&common.benchmarks, machine, model, args.metric.key());
    let title = format!("{} for {model} on {machine}", args.metric.title());

    let mut output = String::new();
    generate_summary(&title, args.metric.unit(), &points, common.color(), &mut output)?;
    print!("{output}");
    Ok(())
}

//! Fixture loading and logging setup shared by all subcommands.

use camino::Utf8PathBuf;
use clap::Args;
use clap::ValueEnum;
use zkml_bench::Result;
use zkml_bench::fixtures::{self, BenchmarkData, Framework};
use zkml_bench::misc::ColorMode;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Common arguments shared between all subcommands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to a framework fixture file [default: built-in records]
    #[arg(long, value_name = "PATH")]
    pub frameworks: Option<Utf8PathBuf>,

    /// Path to a benchmark fixture file [default: built-in records]
    #[arg(long, value_name = "PATH")]
    pub benchmarks: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

#[derive(Debug)]
pub struct Common {
    pub frameworks: Vec<Framework>,
    pub benchmarks: BenchmarkData,
    color: ColorMode,
}

impl Common {
    /// Create a new Common processor with logger and fixture data
    ///
    /// # Errors
    ///
    /// Returns an error if a fixture file cannot be opened or parsed
    pub fn new(args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let frameworks = match &args.frameworks {
            Some(path) => fixtures::load_frameworks(path)?,
            None => fixtures::frameworks_from_json(fixtures::DEFAULT_FRAMEWORKS_JSON)?,
        };

        let benchmarks = match &args.benchmarks {
            Some(path) => BenchmarkData::load_file(path)?,
            None => BenchmarkData::from_json(fixtures::DEFAULT_BENCHMARKS_JSON)?,
        };

        Ok(Self {
            frameworks,
            benchmarks,
            color: args.color,
        })
    }

    pub const fn color(&self) -> ColorMode {
        self.color
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        if log_level == LogLevel::None {
            return;
        }

        let level = match log_level {
            LogLevel::None => return, // Already checked above, but being explicit
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug) || matches!(log_level, LogLevel::Trace))
            .init();
    }
}

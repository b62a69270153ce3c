//! Machine profile parsing and the hourly cost table.

use core::fmt;
use strum::EnumString;

/// GPU accelerator attached to a machine profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Accelerator {
    #[strum(serialize = "CUDA")]
    Cuda,
    #[strum(serialize = "Metal")]
    Metal,
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cuda => write!(f, "CUDA"),
            Self::Metal => write!(f, "Metal"),
        }
    }
}

/// Hardware described by a runner name like `"16CPU-64GB-CUDA"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineSpec {
    pub cpus: u32,
    pub ram_gb: u32,
    pub accelerator: Option<Accelerator>,
}

impl MachineSpec {
    /// Parse a runner name of the form `"<n>CPU-<m>GB-<Accelerator>"`.
    ///
    /// Any accelerator string other than `CUDA` or `Metal` means none.
    #[must_use]
    pub fn parse(runner_name: &str) -> Option<Self> {
        let mut parts = runner_name.split('-');
        let cpus = parts.next()?.replace("CPU", "").replace("GPU", "").parse().ok()?;
        let ram_gb = parts.next()?.replace("GB", "").parse().ok()?;
        let accelerator = parts.next().and_then(|s| s.parse().ok());
        Some(Self { cpus, ram_gb, accelerator })
    }

    /// Selector label, e.g. `"16 Cores, 64 GB RAM, CUDA Accelerator"`.
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = format!("{} Cores, {} GB RAM", self.cpus, self.ram_gb);
        if let Some(accelerator) = self.accelerator {
            label.push_str(&format!(", {accelerator} Accelerator"));
        }
        label
    }
}

/// Hourly machine cost in USD, used by the cost estimator.
///
/// Cost per hour figures per <https://instances.vantage.sh/>.
#[must_use]
pub fn hourly_cost(machine: &str) -> Option<f64> {
    match machine {
        // mac2.metal
        "Darwin-arm-24Ghz-32GB" => Some(0.65),
        // c6g.metal class
        "ubuntu-latest-16-cores" | "64CPU-128GB-None" => Some(2.176),
        // g4dn.8xlarge class
        "ubuntu-latest-cuda" | "16CPU-64GB-CUDA" => Some(4.032),
        _ => None,
    }
}

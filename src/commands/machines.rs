//! The machines subcommand: benchmark machine profiles and hourly cost.

use super::common::{Common, CommonArgs};
use clap::Args;
use ohno::bail;
use zkml_bench::Result;
use zkml_bench::fixtures::{MachineSpec, hourly_cost};

#[derive(Args, Debug)]
pub struct MachinesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn show_machines(args: &MachinesArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let machines = common.benchmarks.machines();
    if machines.is_empty() {
        bail!("benchmark fixture contains no machine profiles");
    }

    let name_width = machines.iter().map(|name| name.chars().count()).max().unwrap_or(0);
    for machine in machines {
        let label = MachineSpec::parse(machine).map_or_else(|| "-".to_string(), |spec| spec.label());
        match hourly_cost(machine) {
            Some(cost) => println!("{machine:<name_width$}  {label} (${cost:.3}/hr)"),
            None => println!("{machine:<name_width$}  {label}"),
        }
    }
    Ok(())
}

//! The operators subcommand: per-framework operator support lists.

use super::common::{Common, CommonArgs};
use clap::Args;
use zkml_bench::Result;
use zkml_bench::reports::generate_operators;

#[derive(Args, Debug)]
pub struct OperatorsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn show_operators(args: &OperatorsArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let mut output = String::new();
    generate_operators(&common.frameworks, common.color(), &mut output)?;
    print!("{output}");
    Ok(())
}

//! The features subcommand: the framework feature comparison table.

use super::common::{Common, CommonArgs};
use clap::Args;
use zkml_bench::Result;
use zkml_bench::resolve::{ActiveVars, Resolver, build};
use zkml_bench::reports::generate_table;
use zkml_bench::schema::feature_properties;

#[derive(Args, Debug)]
pub struct FeaturesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn show_features(args: &FeaturesArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let matrix = build(&feature_properties(), &common.frameworks, &Resolver::new(), &ActiveVars::new());

    let mut output = String::new();
    generate_table(&matrix, common.color(), None, &mut output)?;
    print!("{output}");
    Ok(())
}

//! Check command implementation

use anyhow::Result;
use clap::Args;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub sources: SourceArgs,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let config = args.sources.resolve().into_result()?;
    println!("ok ({})", config.source);
    Ok(())
}

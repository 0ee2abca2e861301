//! whisk-props: show and check the connection settings a FaaS client would use

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}

use anyhow::Context;
use clap::Parser;

use echoform::cli::{self, Cli};
use echoform::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    cli::run(cli).context("echoform failed")
}

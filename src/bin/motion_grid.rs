use clap::Parser;
use motion_plots::cli::{self, GridCli, Tool};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = GridCli::parse();
    cli.common.init_logging();

    cli::run(Tool::Grid, &cli.common).map(ExitCode::from)
}

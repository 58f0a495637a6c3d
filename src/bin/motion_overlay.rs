use clap::Parser;
use motion_plots::cli::{self, OverlayCli, Tool};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = OverlayCli::parse();
    cli.common.init_logging();

    cli::run(Tool::Overlay, &cli.common).map(ExitCode::from)
}

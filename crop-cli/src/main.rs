//! Crop survey CLI - simulate ground truth points and validate crop classification.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "crop-cli",
    version,
    about = "Crop mapping and ground truth validation toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: crop_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    crop_cmd::run(cli.command)
}

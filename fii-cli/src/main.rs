//! FII CLI - prepare and inspect the dataset served to the ranking page.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "fii-cli",
    version,
    about = "FII ranking dataset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: fii_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    fii_cmd::run(cli.command).await
}

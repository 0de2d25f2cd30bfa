use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cargo_ghchangelog::cli::{CargoCli, GhchangelogCli};
use cargo_ghchangelog::runner::Runner;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments - handle both cargo subcommand and direct invocation
    let cli = match CargoCli::try_parse() {
        Ok(CargoCli::Ghchangelog(cli)) => cli,
        Err(_) => {
            // Fall back to parsing as direct invocation (for cargo-ghchangelog binary)
            GhchangelogCli::parse()
        }
    };

    if cli.args.verbose {
        tracing::info!("Running cargo-ghchangelog with verbose output");
    }

    let runner = Runner::new(cli.args, cli.command)?;
    runner.run().await?;

    Ok(())
}

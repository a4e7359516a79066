use clap::Parser;
use tracing::{debug, Level};

mod cli;
mod config;
mod core;
mod data;
mod matchers;
mod render;
mod utils;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so fragments printed on stdout stay clean
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting showcase-embed v{}", env!("CARGO_PKG_VERSION"));

    cli.run().await?;

    Ok(())
}

use clap::Parser;
use tracing::{debug, Level};

use scruffy_video::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries results
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting scruffy-video v{}", env!("CARGO_PKG_VERSION"));

    cli.run().await?;

    Ok(())
}

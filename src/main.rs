use anyhow::Result;
use clap::{Parser, Subcommand};

/// testedge - TestEdge QA Solutions marketing site
#[derive(Parser)]
#[command(name = "testedge")]
#[command(about = "Marketing site and contact form for TestEdge QA Solutions", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = testedge::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    testedge::observability::init_observability(
        "testedge",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => testedge::cli::serve(config, host, port).await,
    }
}

//! MCP Component Catalog - Entry Point
//!
//! Binary entry point for the component catalog MCP server. Serves the
//! MCP protocol over stdio; all logging goes to stderr.

use clap::Parser;
use mcc_server::run_server;

/// Command line interface for the MCP Component Catalog
#[derive(Parser, Debug)]
#[command(name = "mcc")]
#[command(about = "MCP Component Catalog - Catalog Query & Update-Diff Server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run_server(cli.config.as_deref()).await
}

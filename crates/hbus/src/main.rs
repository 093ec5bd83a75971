//! Hello Bus - Entry Point
//!
//! Binary entry point for the Hello Bus client. Runs one greeting round
//! trip against the in-process bus and prints the reply.

use clap::Parser;
use hbus::run;

/// Command line interface for Hello Bus
#[derive(Parser, Debug)]
#[command(name = "hbus")]
#[command(about = "Hello Bus - event-bus greeting client")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Main entry point for Hello Bus
///
/// Waits for the bus to report ready, sends the configured greeting, and
/// prints the responder's reply.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let reply = run(cli.config.as_deref(), cli.log_level.as_deref()).await?;
    println!("{reply}");
    Ok(())
}

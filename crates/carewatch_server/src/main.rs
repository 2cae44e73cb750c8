//! Carewatch server binary.

use anyhow::Result;
use carewatch_server::{init_logging, serve, CarewatchConfig, LoggingConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Carewatch behavior alert demo server", long_about = None)]
struct Args {
    /// Configuration file (default: ./carewatch.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configuration
    #[arg(short, long)]
    bind: Option<String>,

    /// Directory for uploads and alert audio, overriding the configuration
    #[arg(short, long)]
    upload_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    init_logging(&LoggingConfig::new(log_level).with_json_logs(args.json_logs))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let mut config = CarewatchConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(upload_dir) = args.upload_dir {
        config.storage.upload_dir = upload_dir;
    }

    serve(config).await?;
    Ok(())
}

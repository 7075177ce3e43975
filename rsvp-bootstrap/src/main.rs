use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rsvp-indexer")]
#[command(about = "Web3 RSVP event indexer", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Serve the HTTP API without polling the node
    #[arg(long)]
    no_sync: bool,

    /// Emit JSON log lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if args.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if let Some(config) = args.config {
        std::env::set_var("RSVP_INDEXER_CONFIG", config);
    }

    rsvp_bootstrap::run_standalone(rsvp_bootstrap::RunOptions {
        sync_enabled: !args.no_sync,
    })
    .await
}

use anyhow::Result;
use clap::Parser;
use shortcode_registry::{config, server};
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener with click analytics.
#[derive(Parser)]
#[command(name = "shortcode-registry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on, e.g. 127.0.0.1:8000 (overrides LISTEN)
    #[arg(long)]
    listen: Option<String>,

    /// Base for generated short URLs (overrides BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env(cli.listen, cli.base_url)?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    config.print_summary();

    server::run(config).await
}

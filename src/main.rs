use anyhow::Result;
use clap::Parser;
use launch_portal::config::Config;
use launch_portal::server;
use tracing_subscriber::EnvFilter;

/// Server-rendered SpaceX launch catalog.
#[derive(Parser)]
#[command(name = "launch-portal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(short, long)]
    listen: Option<String>,

    /// GraphQL endpoint, overrides `GRAPHQL_ENDPOINT`
    #[arg(short, long)]
    endpoint: Option<String>,
}

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(endpoint) = cli.endpoint {
        config.graphql_endpoint = endpoint;
    }
    config.validate()?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}

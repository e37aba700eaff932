//! CLI administration tool for the launch portal.
//!
//! Queries the configured GraphQL endpoint and manages the response cache
//! without going through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Aggregate statistics
//! cargo run --bin portal-admin -- stats
//!
//! # One launch with its derived status
//! cargo run --bin portal-admin -- show 109
//!
//! # Page through every launch the way the catalog does
//! cargo run --bin portal-admin -- walk --page-size 20 --video-only
//!
//! # Cache tools
//! cargo run --bin portal-admin -- cache check
//! cargo run --bin portal-admin -- cache evict launch:109
//! cargo run --bin portal-admin -- cache evict launches:10:20
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `GRAPHQL_ENDPOINT`, `REDIS_URL` / `REDIS_HOST`, ...

use launch_portal::config::{Config, load_from_env, mask_connection_string};
use launch_portal::domain::entities::{Launch, LaunchStats};
use launch_portal::domain::feed::{FeedParams, FetchOutcome, LaunchFeed, LaunchFilter};
use launch_portal::domain::repositories::LaunchRepository;
use launch_portal::infrastructure::cache::CacheService;
use launch_portal::infrastructure::graphql::queries::{
    GET_LAUNCH_DETAILS, GET_LAUNCHES, GET_LAUNCHES_SIMPLE,
};
use launch_portal::infrastructure::graphql::{
    GraphqlClient, GraphqlLaunchRepository, page_variables,
};
use launch_portal::server::{build_cache, build_graphql_client};
use launch_portal::utils::format::{full_date, group_thousands};
use launch_portal::utils::launch_id::validate_launch_id;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use serde_json::json;
use std::sync::Arc;

/// CLI tool for the launch portal.
#[derive(Parser)]
#[command(name = "portal-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show aggregate launch statistics
    Stats,

    /// Show one launch
    Show {
        /// Launch id
        id: String,
    },

    /// Page through launches until the end of the data
    Walk {
        /// Records requested per page (1..=50)
        #[arg(short, long, default_value_t = 12)]
        page_size: usize,

        /// Keep only launches with a video link
        #[arg(long)]
        video_only: bool,

        /// Stop after this many pages
        #[arg(short, long)]
        max_pages: Option<usize>,
    },

    /// Response cache operations
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

/// Cache subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Check cache connectivity
    Check,

    /// Remove one cached query
    ///
    /// Each limit/offset pair is cached separately: `launches` is the home
    /// page list, `launches:LIMIT:OFFSET` one `/api/launches` page.
    Evict {
        /// `launches`, `launches:LIMIT[:OFFSET]`, `stats` or `launch:<id>`
        target: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_from_env().context("Invalid configuration")?;

    let cache = build_cache(&config).await;
    let client = build_graphql_client(&config, cache.clone())?;

    match cli.command {
        Commands::Stats => handle_stats(client).await?,
        Commands::Show { id } => handle_show(client, &id).await?,
        Commands::Walk {
            page_size,
            video_only,
            max_pages,
        } => handle_walk(client, page_size, video_only, max_pages).await?,
        Commands::Cache { action } => handle_cache_action(action, &config, cache).await?,
    }

    Ok(())
}

/// Displays launch totals.
async fn handle_stats(client: Arc<GraphqlClient>) -> Result<()> {
    println!("{}", "📊 Launch Statistics".bright_blue().bold());
    println!();

    let repo = GraphqlLaunchRepository::uncached(client);
    let stats = repo
        .launch_stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch stats: {}", e))?;

    print_stats(&stats);
    Ok(())
}

fn print_stats(stats: &LaunchStats) {
    let rate = if stats.total == 0 {
        0.0
    } else {
        stats.successful as f64 * 100.0 / stats.total as f64
    };

    println!(
        "  Launches:      {}",
        group_thousands(stats.total).bright_green().bold()
    );
    println!(
        "  Successful:    {}",
        group_thousands(stats.successful).bright_green().bold()
    );
    println!(
        "  Success rate:  {}",
        format!("{rate:.1}%").bright_white().bold()
    );
    println!();
}

/// Displays one launch with its derived status.
async fn handle_show(client: Arc<GraphqlClient>, id: &str) -> Result<()> {
    validate_launch_id(id).map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    let repo = GraphqlLaunchRepository::uncached(client);
    let launch = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch launch: {}", e))?
        .context("Launch not found")?;

    print_launch(&launch);
    Ok(())
}

fn print_launch(launch: &Launch) {
    let status = launch.status();

    println!(
        "{} {}",
        "🚀".bright_blue(),
        launch.mission_name.bright_white().bold()
    );
    println!();
    println!("  ID:      {}", launch.id.bright_black());
    let date = launch.launch_date.map(full_date).unwrap_or_else(|| "-".to_string());
    println!("  Date:    {}", date.cyan());
    println!("  Status:  {} {}", status.icon(), status.label());
    println!(
        "  Rocket:  {} ({})",
        launch.rocket.name.cyan(),
        launch.rocket.kind
    );
    println!(
        "  Site:    {}",
        launch.site.as_deref().unwrap_or("-").cyan()
    );
    if let Some(video) = &launch.links.video_link {
        println!("  Video:   {}", video.bright_cyan());
    }
    println!("  Images:  {}", launch.links.flickr_images.len());
    if let Some(details) = &launch.details {
        println!();
        println!("  {}", details);
    }
    println!();
}

/// Drives a [`LaunchFeed`] to the end of the data, printing each page.
///
/// Stops at the first failed page with an error.
async fn handle_walk(
    client: Arc<GraphqlClient>,
    page_size: usize,
    video_only: bool,
    max_pages: Option<usize>,
) -> Result<()> {
    println!("{}", "🛰️  Walking launches".bright_blue().bold());
    println!();

    let params = FeedParams::new(page_size).with_filter(LaunchFilter::from_video_flag(video_only));
    let repo: Arc<dyn LaunchRepository> = Arc::new(GraphqlLaunchRepository::uncached(client));
    let feed = LaunchFeed::new(repo, params);

    let mut pages = 0;
    loop {
        if max_pages.is_some_and(|max| pages >= max) {
            println!("{}", "⏹  Page limit reached".yellow());
            break;
        }

        match feed.fetch_next_page().await {
            FetchOutcome::Appended { items, reached_end } => {
                pages += 1;
                let snapshot = feed.snapshot().await;
                println!(
                    "  Page {:<4} +{:<3} total {:<5} next offset {}",
                    pages.to_string().bright_white(),
                    items.len().to_string().green(),
                    snapshot.launches.len(),
                    snapshot.offset.to_string().bright_black()
                );
                if reached_end {
                    break;
                }
            }
            FetchOutcome::Exhausted => break,
            FetchOutcome::Failed { offset, message } => {
                bail!("Page at offset {} failed: {}", offset, message);
            }
            FetchOutcome::Busy | FetchOutcome::Cancelled => {
                bail!("Feed was interrupted");
            }
        }
    }

    let snapshot = feed.snapshot().await;
    println!();
    println!(
        "{} {} launches in {} pages",
        "✅".green(),
        snapshot.launches.len().to_string().bright_white().bold(),
        pages
    );
    println!();

    Ok(())
}

/// Dispatches cache commands.
async fn handle_cache_action(
    action: CacheAction,
    config: &Config,
    cache: Arc<dyn CacheService>,
) -> Result<()> {
    match action {
        CacheAction::Check => check_cache(config, cache).await,
        CacheAction::Evict { target, yes } => evict(cache, &target, yes).await,
    }
}

async fn check_cache(config: &Config, cache: Arc<dyn CacheService>) -> Result<()> {
    println!("{}", "🔍 Checking cache...".bright_blue());

    let Some(redis_url) = &config.redis_url else {
        println!("{}", "⚠️  Cache disabled (no REDIS_URL / REDIS_HOST)".yellow());
        return Ok(());
    };

    println!("  Redis: {}", mask_connection_string(redis_url).cyan());

    if cache.health_check().await {
        println!("{}", "✅ Cache reachable".green().bold());
        Ok(())
    } else {
        bail!("Cache unreachable")
    }
}

/// Maps an evict target to its cache key.
fn cache_key_for(target: &str) -> Result<String> {
    match target {
        "launches" => Ok(GraphqlClient::cache_key(&GET_LAUNCHES, &json!({}))),
        "stats" => Ok(GraphqlClient::cache_key(&GET_LAUNCHES_SIMPLE, &json!({}))),
        other => {
            if let Some(id) = other.strip_prefix("launch:") {
                validate_launch_id(id).map_err(|e| anyhow::anyhow!("{}", e.message()))?;
                return Ok(GraphqlClient::cache_key(
                    &GET_LAUNCH_DETAILS,
                    &json!({ "id": id }),
                ));
            }
            if let Some(page) = other.strip_prefix("launches:") {
                let (limit, offset) = parse_page(page)?;
                return Ok(GraphqlClient::cache_key(
                    &GET_LAUNCHES,
                    &page_variables(limit, offset),
                ));
            }
            bail!(
                "Unknown target '{}': expected launches, launches:LIMIT[:OFFSET], stats or launch:<id>",
                other
            )
        }
    }
}

/// Parses `LIMIT[:OFFSET]`; an empty part means the value was not sent.
fn parse_page(page: &str) -> Result<(Option<usize>, Option<usize>)> {
    let (limit, offset) = page.split_once(':').unwrap_or((page, ""));
    let parse = |value: &str| -> Result<Option<usize>> {
        if value.is_empty() {
            Ok(None)
        } else {
            value
                .parse::<usize>()
                .map(Some)
                .with_context(|| format!("Invalid number '{value}' in launches target"))
        }
    };
    Ok((parse(limit)?, parse(offset)?))
}

async fn evict(cache: Arc<dyn CacheService>, target: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Evict cached query".bright_blue().bold());
    println!();

    let key = cache_key_for(target)?;
    println!("  Target: {}", target.cyan());
    println!("  Key:    {}", key.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this entry?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = cache
        .invalidate(&key)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to evict: {}", e))?;

    if removed {
        println!("{}", "✅ Entry removed".green().bold());
    } else {
        println!("{}", "ℹ️  Nothing cached under this key".yellow());
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_page_targets_match_api_keys() {
        assert_eq!(
            cache_key_for("launches:10:20").unwrap(),
            GraphqlClient::cache_key(&GET_LAUNCHES, &json!({ "limit": 10, "offset": 20 }))
        );
        assert_eq!(
            cache_key_for("launches:5").unwrap(),
            GraphqlClient::cache_key(&GET_LAUNCHES, &json!({ "limit": 5 }))
        );
        assert_eq!(
            cache_key_for("launches").unwrap(),
            GraphqlClient::cache_key(&GET_LAUNCHES, &json!({}))
        );
    }

    #[test]
    fn test_rejects_unknown_targets() {
        assert!(cache_key_for("launches:ten").is_err());
        assert!(cache_key_for("launch:bad.id").is_err());
        assert!(cache_key_for("everything").is_err());
    }
}

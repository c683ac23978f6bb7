use anyhow::{Context, Result};
use clap::Parser;
use remote_feed::config::Config;
use remote_feed::util::validate_feed_url;
use remote_feed::{load_feed, FeedItem, RemoteFeedLoader, ReqwestHttpClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Get the config directory path (~/.config/remote-feed/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("remote-feed"))
}

fn init_logging(level: &str) {
    // Configured level is the fallback; RUST_LOG still wins
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},reqwest=warn,hyper=warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser, Debug)]
#[command(name = "remote-feed", about = "Load a remote image feed and print its items")]
struct Args {
    /// Feed URL (defaults to `feed_url` from the config file)
    url: Option<String>,

    /// Config file (defaults to ~/.config/remote-feed/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print items as a JSON array
    #[arg(long)]
    json: bool,
}

fn print_item(item: &FeedItem) {
    println!("{}  {}", item.id, item.image_url);
    if let Some(description) = &item.description {
        println!("    {}", description);
    }
    if let Some(location) = &item.location {
        println!("    @ {}", location);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    init_logging(&config.log_level);

    let url = match args.url.as_deref() {
        Some(raw) => validate_feed_url(raw).with_context(|| format!("Invalid feed URL: {raw}"))?,
        None => config.parsed_feed_url()?.ok_or_else(|| {
            anyhow::anyhow!(
                "No feed URL given. Pass one as an argument or set feed_url in {}",
                config_path.display()
            )
        })?,
    };

    let http = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()
        .context("Failed to build HTTP client")?;
    let client = Arc::new(
        ReqwestHttpClient::new(http)
            .context("Failed to create transport")?
            .with_max_body_bytes(config.max_body_bytes),
    );
    let loader = RemoteFeedLoader::new(url.clone(), client);

    tracing::info!(url = %url, "Loading feed");
    let items = match load_feed(&loader).await {
        Some(result) => result.with_context(|| format!("Failed to load feed from {url}"))?,
        None => anyhow::bail!("Feed request for {url} finished without a result"),
    };

    if args.json {
        let out = serde_json::to_string_pretty(&items).context("Failed to encode items")?;
        println!("{out}");
    } else if items.is_empty() {
        eprintln!("Feed is empty");
    } else {
        items.iter().for_each(print_item);
        eprintln!("{} items", items.len());
    }

    Ok(())
}

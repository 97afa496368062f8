//! Ripple-Crawl main entry point
//!
//! This is the command-line interface for the Ripple-Crawl crawler.

use anyhow::Context;
use clap::Parser;
use ripple_crawl::config::{load_config_with_hash, Config, CrawlerOverrides};
use ripple_crawl::crawler::run_crawl;
use ripple_crawl::output::print_statistics;
use ripple_crawl::SiteMapFetcher;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ripple-Crawl: a concurrent, depth-bounded crawler
///
/// Crawls the site map described in a TOML configuration file, starting at
/// the seed address and fetching every discovered link on its own task.
#[derive(Parser, Debug)]
#[command(name = "ripple-crawl")]
#[command(version = "1.0.0")]
#[command(about = "A concurrent, depth-bounded crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Override the seed address from the config
    #[arg(long)]
    seed: Option<String>,

    /// Override the maximum depth from the config
    #[arg(long, allow_negative_numbers = true)]
    depth: Option<i32>,

    /// Fetch every address at most once, even when discovered concurrently
    #[arg(long)]
    exact: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    let overrides = CrawlerOverrides {
        seed: cli.seed.clone(),
        max_depth: cli.depth,
        exact: cli.exact,
    };
    overrides
        .apply(&mut config)
        .context("invalid command-line override")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ripple_crawl=info,warn"),
            1 => EnvFilter::new("ripple_crawl=debug,info"),
            2 => EnvFilter::new("ripple_crawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the --dry-run mode: shows the effective settings and site map
fn handle_dry_run(config: &Config) {
    println!("=== Ripple-Crawl Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed: {}", config.crawler.seed);
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Dedup: {:?}", config.crawler.dedup);
    match config.crawler.fetch_timeout_ms {
        Some(ms) => println!("  Fetch timeout: {}ms", ms),
        None => println!("  Fetch timeout: none"),
    }

    println!("\nOutput:");
    match &config.output.summary_path {
        Some(path) => println!("  Summary: {}", path),
        None => println!("  Summary: (not written)"),
    }

    let site_map = SiteMapFetcher::from_config(config);
    let mut pages: Vec<_> = site_map.pages().collect();
    pages.sort_by(|a, b| a.0.cmp(b.0));

    println!("\nSite Map ({} pages):", pages.len());
    for (address, page) in pages {
        println!("  - {} ({} links)", address, page.links.len());
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, quiet: bool) -> anyhow::Result<()> {
    let report = run_crawl(config).await?;

    let stdout = std::io::stdout();
    report
        .write_text(&mut stdout.lock())
        .context("failed to write crawl report")?;

    if !quiet {
        println!();
        print_statistics(&report.stats);
    }

    Ok(())
}

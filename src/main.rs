//! CLI front-end for the URL registry.
//!
//! The registry itself is presentation-agnostic; this binary is the "UI
//! collaborator" that submits batches, resolves codes, and renders lists
//! and statistics.
//!
//! # Usage
//!
//! ```bash
//! # Shorten one or more URLs (repeat --url for a batch)
//! url-registry shorten --url https://example.com --validity 60
//! url-registry shorten --url https://example.com --code promo --validity 1440
//!
//! # Resolve a short code, recording a click
//! url-registry resolve promo --referrer https://news.example.com
//!
//! # List all links, newest first
//! url-registry list
//!
//! # Aggregate statistics
//! url-registry stats
//!
//! # Remove expired links
//! url-registry clean
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use url_registry::config::Config;
use url_registry::prelude::*;

/// Local-first URL shortener with click tracking.
#[derive(Parser)]
#[command(name = "url-registry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten one or more URLs in a single batch
    Shorten {
        /// URL to shorten (repeatable)
        #[arg(short, long, required = true)]
        url: Vec<String>,

        /// Validity window in minutes (applies to every URL in the batch)
        #[arg(short, long, default_value_t = 30)]
        validity: i64,

        /// Custom short code for the first URL (others get generated codes)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Resolve a short code and record the click
    Resolve {
        /// The short code to resolve
        code: String,

        /// Referrer to record with the click
        #[arg(short, long)]
        referrer: Option<String>,

        /// User agent string to record with the click
        #[arg(short, long)]
        user_agent: Option<String>,
    },

    /// List all stored links, newest first
    List,

    /// Show aggregate statistics
    Stats,

    /// Remove expired links
    Clean,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let store = Arc::new(
        RedbLinkStore::open(&config.db_path)
            .with_context(|| format!("failed to open database at {}", config.db_path))?,
    );
    let registry = UrlRegistry::new(store, Arc::new(SimulatedLocationResolver::new()));

    match cli.command {
        Commands::Shorten {
            url,
            validity,
            code,
        } => shorten(&registry, &config, url, validity, code),
        Commands::Resolve {
            code,
            referrer,
            user_agent,
        } => resolve(&registry, &code, referrer.as_deref(), user_agent.as_deref()),
        Commands::List => list(&registry, &config),
        Commands::Stats => stats(&registry),
        Commands::Clean => clean(&registry),
    }
}

fn shorten(
    registry: &UrlRegistry<RedbLinkStore, SimulatedLocationResolver>,
    config: &Config,
    urls: Vec<String>,
    validity: i64,
    code: Option<String>,
) -> Result<()> {
    let mut custom = code;
    let submissions: Vec<Submission> = urls
        .into_iter()
        .map(|original_url| Submission {
            original_url,
            validity_minutes: validity,
            custom_short_code: custom.take(),
        })
        .collect();

    let outcome = registry.create_batch(&submissions)?;

    for link in &outcome.created {
        println!(
            "{} {} {} {}",
            "created".green().bold(),
            link.short_url(&config.base_url),
            "->".dimmed(),
            link.original_url
        );
    }
    for error in &outcome.errors {
        eprintln!("{} {}", "error".red().bold(), error);
    }

    if outcome.created.is_empty() && !outcome.errors.is_empty() {
        anyhow::bail!("no links created");
    }
    Ok(())
}

fn resolve(
    registry: &UrlRegistry<RedbLinkStore, SimulatedLocationResolver>,
    code: &str,
    referrer: Option<&str>,
    user_agent: Option<&str>,
) -> Result<()> {
    let target = registry.record_click(code, referrer, user_agent)?;
    println!("{target}");
    Ok(())
}

fn list(
    registry: &UrlRegistry<RedbLinkStore, SimulatedLocationResolver>,
    config: &Config,
) -> Result<()> {
    let mut links = registry.list_all()?;
    links.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    if links.is_empty() {
        println!("no links stored");
        return Ok(());
    }

    for link in &links {
        let status = if link.is_expired() {
            "expired".red()
        } else {
            "active".green()
        };
        println!(
            "{:<8} {:<30} {} clicks, expires {}",
            status,
            link.short_url(&config.base_url),
            link.clicks.len(),
            link.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    Ok(())
}

fn stats(registry: &UrlRegistry<RedbLinkStore, SimulatedLocationResolver>) -> Result<()> {
    let stats = registry.compute_statistics()?;

    println!("{}", "registry statistics".bold());
    println!("  total links:  {}", stats.total_count);
    println!("  active links: {}", stats.active_count.to_string().green());
    println!("  expired:      {}", stats.expired_count.to_string().red());
    println!("  total clicks: {}", stats.total_clicks);
    Ok(())
}

fn clean(registry: &UrlRegistry<RedbLinkStore, SimulatedLocationResolver>) -> Result<()> {
    let removed = registry.clean_expired()?;
    println!("removed {removed} expired link(s)");
    Ok(())
}

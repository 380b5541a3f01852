//! CLI for looking up dog sub-breeds.
//!
//! Resolves each breed argument through a shared caching fetcher, so
//! repeated arguments are served from memory instead of hitting the API.
//!
//! # Usage
//!
//! ```bash
//! # Look up one or more breeds
//! cargo run -- hound beagle
//!
//! # Repeated breeds demonstrate the cache (one upstream call)
//! cargo run -- hound hound hound
//!
//! # Built-in data, no network
//! cargo run -- --offline beagle
//!
//! # Machine-readable output
//! cargo run -- --json hound beagle
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use breed_fetcher::config;
use breed_fetcher::prelude::*;

/// Look up dog sub-breeds via the dog.ceo API, with in-process caching.
#[derive(Parser)]
#[command(name = "breed-fetcher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Breed names to look up; repeated names are served from cache
    #[arg(required = true)]
    breeds: Vec<String>,

    /// Use built-in breed data instead of the dog.ceo API
    #[arg(long)]
    offline: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let cli = Cli::parse();

    if cli.offline {
        let fetcher = CachingBreedFetcher::new(StaticBreedFetcher::sample());
        run(fetcher, &cli).await
    } else {
        let dog_api = DogApiFetcher::new(
            &config.dog_api_base_url,
            Duration::from_secs(config.http_timeout_seconds),
        )?;
        let fetcher = CachingBreedFetcher::new(dog_api);
        run(fetcher, &cli).await
    }
}

fn init_tracing(config: &config::Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Resolves every breed argument through the shared caching fetcher and
/// prints the results.
///
/// Unknown breeds are reported per breed; any other lookup failure aborts.
/// Exits with an error if no breed could be resolved at all.
async fn run<F: BreedFetcher>(fetcher: CachingBreedFetcher<F>, cli: &Cli) -> Result<()> {
    let mut results: Vec<(String, Option<Vec<String>>)> = Vec::with_capacity(cli.breeds.len());

    for breed in &cli.breeds {
        match fetcher.sub_breeds(breed).await {
            Ok(sub_breeds) => results.push((breed.clone(), Some(sub_breeds))),
            Err(e) if e.is_not_found() => {
                results.push((breed.clone(), None));
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to look up '{breed}'"));
            }
        }
    }

    if cli.json {
        print_json(&results, fetcher.calls_made().await)?;
    } else {
        print_text(&results, fetcher.calls_made().await, fetcher.cache_size().await);
    }

    if results.iter().all(|(_, subs)| subs.is_none()) {
        anyhow::bail!("No breed could be resolved");
    }

    Ok(())
}

fn print_text(results: &[(String, Option<Vec<String>>)], calls_made: u64, cache_size: usize) {
    for (breed, sub_breeds) in results {
        match sub_breeds {
            Some(subs) if subs.is_empty() => {
                println!("{}: {}", breed.cyan().bold(), "no sub-breeds".dimmed());
            }
            Some(subs) => {
                println!("{}: {}", breed.cyan().bold(), subs.join(", "));
            }
            None => {
                println!("{}: {}", breed.cyan().bold(), "breed not found".red());
            }
        }
    }

    println!();
    println!(
        "{} {} upstream, {} cached",
        "→".dimmed(),
        format!("{} call(s)", calls_made).bright_white(),
        cache_size
    );
}

fn print_json(results: &[(String, Option<Vec<String>>)], calls_made: u64) -> Result<()> {
    let breeds: serde_json::Map<String, serde_json::Value> = results
        .iter()
        .map(|(breed, sub_breeds)| {
            let value = match sub_breeds {
                Some(subs) => serde_json::json!(subs),
                None => serde_json::Value::Null,
            };
            (breed.clone(), value)
        })
        .collect();

    let output = serde_json::json!({
        "breeds": breeds,
        "upstream_calls": calls_made,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

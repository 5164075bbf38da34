//! Tipster CLI - inspect prediction availability, odds and cache TTLs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use tipster::availability::{partition_availability, AvailabilityClient, BackendConfig};
use tipster::core::cache_key::{prediction_cache_key, ttl_for_bucket, ttl_for_item};
use tipster::core::odds::{edge_ev, to_american_odds, to_decimal_odds, to_pct};
use tipster::models::TimeBucket;

#[derive(Parser)]
#[command(name = "tipster")]
#[command(author, version, about = "Prediction availability and odds inspection CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check prediction availability for a batch of matches
    Availability {
        /// Comma-separated match ids
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<u32>,

        /// Do not trigger consensus generation upstream
        #[arg(long)]
        no_trigger: bool,

        /// Consensus staleness tolerance in hours
        #[arg(long, default_value = "168")]
        staleness_hours: u32,
    },

    /// Convert a win probability to display odds
    Odds {
        /// Win probability (0-1)
        #[arg(short, long)]
        probability: f64,

        /// Offered decimal odds to compute the expected-value edge against
        #[arg(short, long)]
        offered: Option<f64>,
    },

    /// Show the cache TTL for a time-to-kickoff bucket
    Ttl {
        /// Bucket (3h, 6h, 12h, 24h, 48h or 72h); omit for the default
        #[arg(short, long)]
        bucket: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let cli = Cli::parse();

    match cli.command {
        Commands::Availability {
            ids,
            no_trigger,
            staleness_hours,
        } => {
            let config = BackendConfig::from_env()
                .context("BACKEND_URL and BACKEND_API_KEY must be set")?;
            let client = AvailabilityClient::new(config);

            let response = client
                .fetch_availability_with(&ids, !no_trigger, staleness_hours)
                .await
                .context("availability request failed")?;
            let partition = partition_availability(&response.availability);

            println!(
                "requested {} (deduped {}), enriched {}",
                response.meta.requested, response.meta.deduped, response.meta.enrich_true
            );

            println!("\nready ({}):", partition.ready.len());
            for item in response
                .availability
                .iter()
                .filter(|i| partition.ready.contains(&i.match_id))
            {
                println!(
                    "  {}  key={}  ttl={}s",
                    item.match_id,
                    prediction_cache_key(item.match_id, item.last_updated.as_deref()),
                    ttl_for_item(item)
                );
            }

            println!("\nwaiting ({}):", partition.waiting.len());
            for item in &partition.waiting {
                println!("  {}  reason={}", item.match_id, item.reason);
            }

            println!("\nno odds ({}):", partition.no_odds.len());
            for item in &partition.no_odds {
                println!("  {}  reason={}", item.match_id, item.reason);
            }
        }

        Commands::Odds {
            probability,
            offered,
        } => {
            println!("probability: {}", to_pct(probability));
            println!("decimal:     {}", to_decimal_odds(probability));
            println!("american:    {}", to_american_odds(probability));
            if let Some(offered) = offered {
                println!("edge @ {:.2}: {:+.4}", offered, edge_ev(probability, offered));
            }
        }

        Commands::Ttl { bucket } => {
            let parsed = bucket.as_deref().and_then(TimeBucket::parse);
            if let Some(raw) = bucket {
                if parsed.is_none() {
                    tracing::warn!("Unrecognized bucket '{}', using default TTL", raw);
                }
            }
            println!("{}s", ttl_for_bucket(parsed));
        }
    }

    Ok(())
}

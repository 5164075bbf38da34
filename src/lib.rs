//! Tipster prediction-cache core
//!
//! This library provides the prediction layer primitives for the tipster
//! backend:
//! - Odds conversion (decimal, American, percentage, expected-value edge)
//! - Consensus-versioned cache keys and kickoff-aware cache TTLs
//! - Availability fetching and ready / waiting / no-odds classification
//!
//! # Example
//!
//! ```no_run
//! use tipster::availability::{partition_availability, AvailabilityClient, BackendConfig};
//! use tipster::core::cache_key::CachePlan;
//! use tipster::core::odds::to_decimal_odds;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AvailabilityClient::new(BackendConfig::from_env()?);
//!
//!     let response = client.fetch_availability(&[101, 102]).await?;
//!     let partition = partition_availability(&response.availability);
//!
//!     for item in response
//!         .availability
//!         .iter()
//!         .filter(|i| partition.ready.contains(&i.match_id))
//!     {
//!         let plan = CachePlan::plan_for(item.match_id, item.last_updated.as_deref(), item.time_bucket);
//!         println!("store under {} for {}s", plan.key, plan.ttl_secs);
//!     }
//!
//!     println!("fair odds for a coin flip: {}", to_decimal_odds(0.5));
//!     Ok(())
//! }
//! ```

pub mod availability;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use availability::{
    partition_availability, AvailabilityClient, AvailabilityError, AvailabilityPartition,
    BackendConfig,
};
pub use core::cache_key::{prediction_cache_key, ttl_for_bucket, ttl_for_item, CachePlan};
pub use models::{
    AvailabilityItem, AvailabilityMeta, AvailabilityReason, AvailabilityResponse, TimeBucket,
};

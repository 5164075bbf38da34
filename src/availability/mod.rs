//! Prediction availability: upstream fetch and classification
//!
//! Asks the prediction backend which matches in a batch can be predicted
//! right now, then splits the verdicts into ready / waiting / no-odds
//! buckets.
//!
//! # Example
//!
//! ```no_run
//! use tipster::availability::{partition_availability, AvailabilityClient, BackendConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AvailabilityClient::new(BackendConfig::from_env()?);
//!
//!     let response = client.fetch_availability(&[101, 102, 103]).await?;
//!     let partition = partition_availability(&response.availability);
//!     println!("{} matches ready", partition.ready.len());
//!
//!     Ok(())
//! }
//! ```

mod client;

pub use client::{AvailabilityClient, AvailabilityError, BackendConfig, MissingConfig};

use serde::Serialize;

use crate::models::{AvailabilityItem, AvailabilityReason};

/// Classification of a batch of availability items.
///
/// `ready` holds bare match ids (the caller goes on to compute and cache
/// predictions for them); the other two buckets keep the full item so the
/// caller can surface the reason. Input order is preserved within each
/// bucket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AvailabilityPartition {
    /// Matches that can be predicted now.
    pub ready: Vec<u32>,
    /// Matches worth polling again soon (consensus or odds in flight).
    pub waiting: Vec<AvailabilityItem>,
    /// Matches that are permanently unavailable for this cycle.
    pub no_odds: Vec<AvailabilityItem>,
}

/// Split availability items into ready / waiting / no-odds buckets.
///
/// An enriched item is ready regardless of its reason. A non-enriched
/// item goes to `waiting` only for the two transient reason codes;
/// everything else, including reason codes this build does not know, is
/// treated as unavailable.
pub fn partition_availability(items: &[AvailabilityItem]) -> AvailabilityPartition {
    let mut partition = AvailabilityPartition::default();

    for item in items {
        if item.enrich {
            partition.ready.push(item.match_id);
        } else if item.reason.is_transient() {
            partition.waiting.push(item.clone());
        } else {
            if let AvailabilityReason::Unknown(raw) = &item.reason {
                tracing::warn!(
                    "Unknown availability reason '{}' for match {}, treating as unavailable",
                    raw,
                    item.match_id
                );
            }
            partition.no_odds.push(item.clone());
        }
    }

    partition
}

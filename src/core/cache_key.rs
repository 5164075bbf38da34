//! Prediction cache keying and TTL selection
//!
//! A prediction is cached under a key versioned by the consensus creation
//! timestamp, so a fresh consensus always lands under a fresh key and a
//! reused key can never serve stale consensus data. The TTL is a step
//! function of the match's time-to-kickoff bucket: the closer to kickoff,
//! the faster odds move and the shorter the lifetime.

use crate::models::{AvailabilityItem, TimeBucket};

/// Key namespace prefix shared with the cache store.
const KEY_PREFIX: &str = "prediction";

/// Version token used when no consensus exists yet for the match.
const NO_CONSENSUS_TOKEN: &str = "none";

/// Cache lifetime when the time bucket is missing or unrecognized.
pub const DEFAULT_TTL_SECS: u64 = 5400;

/// Cache key for a match's prediction, versioned by consensus timestamp.
///
/// Two consensus timestamps for the same match always yield two distinct
/// keys.
///
/// # Examples
/// ```
/// use tipster::core::cache_key::prediction_cache_key;
/// assert_eq!(
///     prediction_cache_key(100, Some("2024-01-01T00:00:00Z")),
///     "prediction:100:2024-01-01T00:00:00Z"
/// );
/// assert_eq!(prediction_cache_key(100, None), "prediction:100:none");
/// ```
pub fn prediction_cache_key(match_id: u32, consensus_created_at: Option<&str>) -> String {
    format!(
        "{}:{}:{}",
        KEY_PREFIX,
        match_id,
        consensus_created_at.unwrap_or(NO_CONSENSUS_TOKEN)
    )
}

/// Cache TTL in seconds for a time-to-kickoff bucket.
///
/// The breakpoints and values are load-bearing: downstream invalidation
/// timing depends on them exactly.
pub fn ttl_for_bucket(bucket: Option<TimeBucket>) -> u64 {
    match bucket {
        Some(TimeBucket::H72) | Some(TimeBucket::H48) => 7200,
        Some(TimeBucket::H24) => 2700,
        Some(TimeBucket::H12) => 1800,
        Some(TimeBucket::H6) => 1200,
        Some(TimeBucket::H3) => 600,
        None => DEFAULT_TTL_SECS,
    }
}

/// TTL for an availability item, from its reported time bucket.
pub fn ttl_for_item(item: &AvailabilityItem) -> u64 {
    ttl_for_bucket(item.time_bucket)
}

/// Where and for how long to store one match's prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePlan {
    pub key: String,
    pub ttl_secs: u64,
}

impl CachePlan {
    /// Build the storage plan for a ready match.
    pub fn plan_for(
        match_id: u32,
        consensus_created_at: Option<&str>,
        time_bucket: Option<TimeBucket>,
    ) -> Self {
        Self {
            key: prediction_cache_key(match_id, consensus_created_at),
            ttl_secs: ttl_for_bucket(time_bucket),
        }
    }
}

//! Core business logic modules

pub mod cache_key;
pub mod odds;

// Re-export commonly used items
pub use cache_key::{prediction_cache_key, ttl_for_bucket, ttl_for_item, CachePlan};
pub use odds::{clamp_probability, edge_ev, to_american_odds, to_decimal_odds, to_pct};

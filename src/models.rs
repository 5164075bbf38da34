use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Discretized time-to-kickoff category reported by the upstream.
///
/// Drives TTL selection: the closer to kickoff, the faster odds and
/// consensus move, so the shorter the cache lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    H3,
    H6,
    H12,
    H24,
    H48,
    H72,
}

impl TimeBucket {
    /// Parse a wire string like "3h". Unknown strings yield `None` so an
    /// unrecognized bucket falls through to the default TTL instead of
    /// failing the whole response decode.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "3h" => Some(TimeBucket::H3),
            "6h" => Some(TimeBucket::H6),
            "12h" => Some(TimeBucket::H12),
            "24h" => Some(TimeBucket::H24),
            "48h" => Some(TimeBucket::H48),
            "72h" => Some(TimeBucket::H72),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBucket::H3 => "3h",
            TimeBucket::H6 => "6h",
            TimeBucket::H12 => "12h",
            TimeBucket::H24 => "24h",
            TimeBucket::H48 => "48h",
            TimeBucket::H72 => "72h",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TimeBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Lenient `time_bucket` field decoder: missing, null or unrecognized
/// values all map to `None`.
fn lenient_time_bucket<'de, D>(deserializer: D) -> Result<Option<TimeBucket>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(TimeBucket::parse))
}

/// Upstream reason code attached to every availability item.
///
/// The known codes are a closed set; anything else lands in `Unknown`
/// with the raw string preserved for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityReason {
    /// Prediction can be computed now.
    Ok,
    /// Consensus generation is in flight; worth retrying shortly.
    WaitingConsensus,
    /// Bookmaker odds are still being collected; worth retrying shortly.
    CollectingOdds,
    /// No bookmaker covers the match; terminal.
    NoBookmakers,
    /// Reason code this build does not know about; treated as terminal.
    Unknown(String),
}

impl AvailabilityReason {
    pub fn parse(s: &str) -> Self {
        match s {
            "ok" => AvailabilityReason::Ok,
            "waiting_consensus" => AvailabilityReason::WaitingConsensus,
            "collecting_odds" => AvailabilityReason::CollectingOdds,
            "no_bookmakers" => AvailabilityReason::NoBookmakers,
            other => AvailabilityReason::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AvailabilityReason::Ok => "ok",
            AvailabilityReason::WaitingConsensus => "waiting_consensus",
            AvailabilityReason::CollectingOdds => "collecting_odds",
            AvailabilityReason::NoBookmakers => "no_bookmakers",
            AvailabilityReason::Unknown(raw) => raw,
        }
    }

    /// Whether the match is worth polling again soon. Exactly two codes
    /// qualify; every other non-enriched item is permanently unavailable.
    pub fn is_transient(&self) -> bool {
        match self {
            AvailabilityReason::WaitingConsensus | AvailabilityReason::CollectingOdds => true,
            AvailabilityReason::Ok
            | AvailabilityReason::NoBookmakers
            | AvailabilityReason::Unknown(_) => false,
        }
    }
}

impl fmt::Display for AvailabilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AvailabilityReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AvailabilityReason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(AvailabilityReason::parse(&raw))
    }
}

/// One availability verdict per requested match, produced entirely by the
/// upstream; this crate only classifies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityItem {
    pub match_id: u32,
    /// True when enough data exists to compute a prediction now.
    pub enrich: bool,
    pub reason: AvailabilityReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmakers: Option<u32>,
    #[serde(default, deserialize_with = "lenient_time_bucket")]
    pub time_bucket: Option<TimeBucket>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_secs_to_kickoff: Option<i64>,
}

/// Upstream diagnostics for an availability call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityMeta {
    #[serde(default)]
    pub requested: u32,
    #[serde(default)]
    pub deduped: u32,
    #[serde(default)]
    pub enrich_true: u32,
    #[serde(default)]
    pub enrich_false: u32,
    #[serde(default)]
    pub failure_breakdown: HashMap<String, serde_json::Value>,
}

/// Full availability response for a batch of match ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub availability: Vec<AvailabilityItem>,
    #[serde(default)]
    pub meta: AvailabilityMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_bucket_parse() {
        assert_eq!(TimeBucket::parse("3h"), Some(TimeBucket::H3));
        assert_eq!(TimeBucket::parse("72h"), Some(TimeBucket::H72));
        assert_eq!(TimeBucket::parse("unknown"), None);
        assert_eq!(TimeBucket::parse(""), None);
    }

    #[test]
    fn test_time_bucket_roundtrip() {
        for s in ["3h", "6h", "12h", "24h", "48h", "72h"] {
            assert_eq!(TimeBucket::parse(s).unwrap().as_str(), s);
        }
    }

    #[test]
    fn test_reason_parse_known() {
        assert_eq!(AvailabilityReason::parse("ok"), AvailabilityReason::Ok);
        assert_eq!(
            AvailabilityReason::parse("waiting_consensus"),
            AvailabilityReason::WaitingConsensus
        );
        assert_eq!(
            AvailabilityReason::parse("collecting_odds"),
            AvailabilityReason::CollectingOdds
        );
        assert_eq!(
            AvailabilityReason::parse("no_bookmakers"),
            AvailabilityReason::NoBookmakers
        );
    }

    #[test]
    fn test_reason_parse_unknown_preserves_raw() {
        let reason = AvailabilityReason::parse("consensus_degraded");
        assert_eq!(
            reason,
            AvailabilityReason::Unknown("consensus_degraded".to_string())
        );
        assert_eq!(reason.as_str(), "consensus_degraded");
    }

    #[test]
    fn test_reason_transient_set() {
        assert!(AvailabilityReason::WaitingConsensus.is_transient());
        assert!(AvailabilityReason::CollectingOdds.is_transient());
        assert!(!AvailabilityReason::Ok.is_transient());
        assert!(!AvailabilityReason::NoBookmakers.is_transient());
        assert!(!AvailabilityReason::Unknown("anything".to_string()).is_transient());
    }

    #[test]
    fn test_item_deserialize_full() {
        let json = r#"{
            "match_id": 42,
            "enrich": true,
            "reason": "ok",
            "bookmakers": 12,
            "time_bucket": "24h",
            "last_updated": "2024-06-01T12:00:00Z",
            "min_secs_to_kickoff": 86400
        }"#;

        let item: AvailabilityItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.match_id, 42);
        assert!(item.enrich);
        assert_eq!(item.reason, AvailabilityReason::Ok);
        assert_eq!(item.bookmakers, Some(12));
        assert_eq!(item.time_bucket, Some(TimeBucket::H24));
        assert_eq!(item.min_secs_to_kickoff, Some(86400));
    }

    #[test]
    fn test_item_deserialize_minimal() {
        let json = r#"{"match_id": 7, "enrich": false, "reason": "no_bookmakers"}"#;
        let item: AvailabilityItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.match_id, 7);
        assert!(!item.enrich);
        assert_eq!(item.time_bucket, None);
        assert_eq!(item.bookmakers, None);
    }

    #[test]
    fn test_item_unrecognized_time_bucket_is_none() {
        let json = r#"{"match_id": 7, "enrich": true, "reason": "ok", "time_bucket": "96h"}"#;
        let item: AvailabilityItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.time_bucket, None);

        let json = r#"{"match_id": 7, "enrich": true, "reason": "ok", "time_bucket": null}"#;
        let item: AvailabilityItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.time_bucket, None);
    }

    #[test]
    fn test_response_deserialize_without_meta() {
        let json = r#"{"availability": []}"#;
        let resp: AvailabilityResponse = serde_json::from_str(json).unwrap();
        assert!(resp.availability.is_empty());
        assert_eq!(resp.meta.requested, 0);
    }

    #[test]
    fn test_response_deserialize_with_meta() {
        let json = r#"{
            "availability": [
                {"match_id": 1, "enrich": true, "reason": "ok"},
                {"match_id": 2, "enrich": false, "reason": "waiting_consensus"}
            ],
            "meta": {
                "requested": 2,
                "deduped": 2,
                "enrich_true": 1,
                "enrich_false": 1,
                "failure_breakdown": {"waiting_consensus": [2]}
            }
        }"#;

        let resp: AvailabilityResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.availability.len(), 2);
        assert_eq!(resp.meta.requested, 2);
        assert!(resp.meta.failure_breakdown.contains_key("waiting_consensus"));
    }
}

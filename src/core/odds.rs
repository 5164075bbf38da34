//! Odds Conversion
//!
//! Pure formatting helpers mapping a win probability to the odds formats
//! shown to subscribers, plus the expected-value edge against a market
//! price.
//!
//! Decimal odds are the reciprocal of probability:
//!     decimal = 1 / p
//!
//! American odds split at even money (decimal 2.0):
//!     decimal >= 2  ->  +round((decimal - 1) * 100)
//!     decimal <  2  ->   round(-100 / (decimal - 1))

/// Lower clamp bound; keeps `1 / p` finite.
pub const MIN_PROBABILITY: f64 = 0.001;
/// Upper clamp bound; rules out degenerate 100% certainty.
pub const MAX_PROBABILITY: f64 = 0.999;

/// Clamp a probability into `[0.001, 0.999]`.
///
/// NaN and anything below the lower bound coerce to `MIN_PROBABILITY`, so
/// malformed input produces a valid (if extreme) result instead of
/// failing.
pub fn clamp_probability(probability: f64) -> f64 {
    if !(probability > MIN_PROBABILITY) {
        MIN_PROBABILITY
    } else if probability > MAX_PROBABILITY {
        MAX_PROBABILITY
    } else {
        probability
    }
}

/// Round half-up to the given number of decimal places.
fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Convert a win probability to decimal odds with exactly 2 decimal
/// digits.
///
/// # Examples
/// ```
/// use tipster::core::odds::to_decimal_odds;
/// assert_eq!(to_decimal_odds(0.5), "2.00");
/// assert_eq!(to_decimal_odds(0.25), "4.00");
/// ```
pub fn to_decimal_odds(probability: f64) -> String {
    let p = clamp_probability(probability);
    format!("{:.2}", round_to(1.0 / p, 2))
}

/// Convert a win probability to a display percentage with 1 decimal
/// digit.
///
/// # Examples
/// ```
/// use tipster::core::odds::to_pct;
/// assert_eq!(to_pct(0.5), "50.0%");
/// ```
pub fn to_pct(probability: f64) -> String {
    let p = clamp_probability(probability);
    format!("{:.1}%", round_to(p * 100.0, 1))
}

/// Convert a win probability to American odds.
///
/// Favorites (decimal < 2) are negative with no sign prefix beyond the
/// minus; underdogs and even money carry an explicit `+`.
///
/// # Examples
/// ```
/// use tipster::core::odds::to_american_odds;
/// assert_eq!(to_american_odds(0.5), "+100");
/// assert_eq!(to_american_odds(0.8), "-400");
/// ```
pub fn to_american_odds(probability: f64) -> String {
    let decimal = 1.0 / clamp_probability(probability);
    if decimal >= 2.0 {
        format!("+{}", ((decimal - 1.0) * 100.0).round() as i64)
    } else {
        format!("{}", (-100.0 / (decimal - 1.0)).round() as i64)
    }
}

/// Expected value per unit staked at the offered decimal odds.
///
/// Zero means fair odds, positive means a value bet. Offered odds of 1.0
/// or below (or NaN) can never be favorable and return -1.0, the maximal
/// loss. The probability is NOT clamped here, unlike the conversion
/// functions above; callers pass an already-clamped model probability.
///
/// # Examples
/// ```
/// use tipster::core::odds::edge_ev;
/// assert_eq!(edge_ev(0.5, 2.0), 0.0);
/// assert_eq!(edge_ev(0.5, 0.0), -1.0);
/// ```
pub fn edge_ev(probability: f64, offered_decimal_odds: f64) -> f64 {
    if !(offered_decimal_odds > 1.0) {
        return -1.0;
    }
    probability * offered_decimal_odds - 1.0
}

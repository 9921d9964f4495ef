//! Quantity parsing for a normalized segment.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ParsedQuantity;

/// Leading count, optional `x`/`*` multiplier, then the description.
static LEADING_COUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*(x|\*)?\s*(.+)$").unwrap());
static HALF_PORTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"1/2|demi").unwrap());

/// Extract the portion multiplier from a normalized segment.
///
/// Rules, first match wins:
/// 1. leading integer (`2 oeufs`, `3x biscuits`, `2*pain`): that integer,
///    with 1 when it is zero;
/// 2. `1/2` or `demi` anywhere: 0.5;
/// 3. otherwise 1.
///
/// A segment starting with `1/2` takes rule 1 (count 1, core `/2 ...`).
pub fn parse_quantity(segment: &str) -> ParsedQuantity {
    if let Some(caps) = LEADING_COUNT_RE.captures(segment) {
        let count = caps[1]
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite() && *n > 0.0)
            .unwrap_or(1.0);
        return ParsedQuantity {
            quantity: count,
            core: caps[3].trim().to_string(),
        };
    }

    let quantity = if HALF_PORTION_RE.is_match(segment) { 0.5 } else { 1.0 };
    ParsedQuantity {
        quantity,
        core: segment.to_string(),
    }
}

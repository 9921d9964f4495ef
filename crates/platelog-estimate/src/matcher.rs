//! Longest-substring food matching.

use tracing::debug;

use crate::dictionary::FoodTable;
use crate::quantity::parse_quantity;
use crate::types::MatchResult;

/// Find the longest dictionary key contained in `segment`.
///
/// Containment is a plain substring test over the whole normalized
/// segment (including any leading quantity), so `"pain"` also matches
/// inside `"copain"`. Among keys of equal length the first in table order
/// wins.
pub fn match_food<'a>(segment: &str, table: &'a FoodTable) -> MatchResult<'a> {
    let quantity = parse_quantity(segment).quantity;

    let mut best: Option<&'a str> = None;
    let mut best_len = 0;
    for key in table.keys() {
        if !segment.contains(key.as_str()) {
            continue;
        }
        let len = key.chars().count();
        if best.is_none() || len > best_len {
            best = Some(key.as_str());
            best_len = len;
        }
    }

    debug!(segment, matched = ?best, quantity, "match_food");
    MatchResult {
        matched_food: best,
        quantity,
    }
}

//! Meal estimator: splits the day's meal texts into segments and sums the
//! calories of every recognized food.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::dictionary::{FoodDictionary, FoodTable};
use crate::matcher::match_food;
use crate::normalize::normalize;
use crate::types::{EstimationResult, SegmentOutcome};
use platelog_core::{Result, DEFAULT_MAX_UNKNOWN};
use platelog_store::{MealSlot, MealTexts};

static LINE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());
static ITEM_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+•\-]").unwrap());

/// Segments shorter than this (in characters, after normalization) are noise.
const MIN_SEGMENT_CHARS: usize = 3;

/// Split one meal text into trimmed, non-empty raw segments: by lines, then
/// by `+`, `•` and `-` within each line.
pub fn split_segments(text: &str) -> Vec<&str> {
    LINE_SPLIT_RE
        .split(text)
        .flat_map(|line| ITEM_SPLIT_RE.split(line))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Computes calorie estimates against a [`FoodDictionary`].
#[derive(Clone)]
pub struct MealEstimator {
    dictionary: FoodDictionary,
    max_unknown: usize,
}

impl MealEstimator {
    pub fn new(dictionary: FoodDictionary) -> Self {
        Self {
            dictionary,
            max_unknown: DEFAULT_MAX_UNKNOWN,
        }
    }

    /// Override how many unknown foods one run reports.
    pub fn with_max_unknown(mut self, max_unknown: usize) -> Self {
        self.max_unknown = max_unknown;
        self
    }

    pub fn dictionary(&self) -> &FoodDictionary {
        &self.dictionary
    }

    pub fn max_unknown(&self) -> usize {
        self.max_unknown
    }

    /// Estimate a day's meals against the current dictionary.
    ///
    /// Only reading the learned layer can fail; the text itself never does.
    pub fn estimate(&self, meals: &MealTexts, collect_unknown: bool) -> Result<EstimationResult> {
        let table = self.dictionary.build()?;
        Ok(estimate_with_table(&table, meals, collect_unknown, self.max_unknown))
    }

    /// Estimate a single free text as if it were breakfast.
    pub fn estimate_text(&self, text: &str, collect_unknown: bool) -> Result<EstimationResult> {
        let mut meals = MealTexts::default();
        meals.set(MealSlot::Breakfast, text);
        self.estimate(&meals, collect_unknown)
    }
}

/// Pure estimation over an already built table.
pub fn estimate_with_table(
    table: &FoodTable,
    meals: &MealTexts,
    collect_unknown: bool,
    max_unknown: usize,
) -> EstimationResult {
    let mut result = EstimationResult::default();

    for (slot, text) in meals.iter() {
        if text.trim().is_empty() {
            continue;
        }

        for raw in split_segments(text) {
            let segment = normalize(raw);
            if segment.chars().count() < MIN_SEGMENT_CHARS {
                continue;
            }

            let found = match_food(&segment, table);
            let calories = match found.matched_food {
                Some(food) => table.get(food).copied().unwrap_or(0.0) * found.quantity,
                None => {
                    if collect_unknown && !result.unknown_foods.contains(&segment) {
                        result.unknown_foods.push(segment.clone());
                    }
                    0.0
                }
            };
            result.total_calories += calories;
            result.segments.push(SegmentOutcome {
                slot,
                matched_food: found.matched_food.map(str::to_string),
                quantity: found.quantity,
                calories,
                segment,
            });
        }
    }

    result.unknown_foods.truncate(max_unknown);
    debug!(
        total = result.total_calories,
        segments = result.segments.len(),
        unknown = result.unknown_foods.len(),
        "estimation complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use platelog_store::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn builtin_estimator() -> MealEstimator {
        MealEstimator::new(FoodDictionary::new(Arc::new(MemoryStore::new())))
    }

    fn estimator_with(entries: &[(&str, f64)]) -> MealEstimator {
        let builtin = entries.iter().map(|(k, v)| (k.to_string(), *v));
        MealEstimator::new(FoodDictionary::with_builtin(Arc::new(MemoryStore::new()), builtin))
    }

    #[test]
    fn test_split_segments() {
        let segs = split_segments("2 oeufs + pain\n\n• café - lait\n  \n+");
        assert_eq!(segs, vec!["2 oeufs", "pain", "café", "lait"]);
    }

    #[test]
    fn test_split_segments_crlf() {
        assert_eq!(split_segments("riz\r\npoulet"), vec!["riz", "poulet"]);
    }

    #[test]
    fn test_counted_and_unknown() {
        let est = estimator_with(&[("banane", 90.0)]);
        let result = est.estimate_text("2 bananes\n1/2 pomme", true).unwrap();
        assert_eq!(result.total_calories, 180.0);
        assert_eq!(result.unknown_foods, vec!["1/2 pomme".to_string()]);
    }

    #[test]
    fn test_builtin_breakfast() {
        let est = builtin_estimator();
        let result = est.estimate_text("1 banane + 2 oeufs", true).unwrap();
        assert_eq!(result.total_calories, 250.0);
        assert!(result.unknown_foods.is_empty());
        assert_eq!(result.rounded_total(), 250);
    }

    #[test]
    fn test_all_slots_summed() {
        let est = builtin_estimator();
        let meals = MealTexts {
            breakfast: "café au lait".into(),
            lunch: "riz, poulet".into(),
            dinner: "soupe légumes\npain".into(),
            snack: "pomme".into(),
        };
        // "riz, poulet" is a single segment; "poulet" is the longest key in it.
        let result = est.estimate(&meals, true).unwrap();
        assert_eq!(result.total_calories, 60.0 + 165.0 + 120.0 + 80.0 + 80.0);
        assert_eq!(result.segments.len(), 5);
        assert_eq!(result.segments[1].slot, MealSlot::Lunch);
    }

    #[test]
    fn test_equal_length_keys_resolve_in_shipped_order() {
        let est = builtin_estimator();
        let result = est.estimate_text("café pain", true).unwrap();
        assert_eq!(result.segments[0].matched_food.as_deref(), Some("pain"));
        assert_eq!(result.total_calories, 80.0);
        assert_eq!(est.estimate_text("lait café", true).unwrap().total_calories, 120.0);
    }

    #[test]
    fn test_half_portion() {
        let est = builtin_estimator();
        let result = est.estimate_text("une demi banane", false).unwrap();
        assert_eq!(result.total_calories, 45.0);
    }

    #[test]
    fn test_short_segments_skipped() {
        let est = estimator_with(&[("riz", 180.0)]);
        let result = est.estimate_text("ab + x\n!!", true).unwrap();
        assert_eq!(result.total_calories, 0.0);
        assert!(result.unknown_foods.is_empty());
        assert!(result.segments.is_empty());
    }

    #[test]
    fn test_unknown_cap() {
        let est = estimator_with(&[("riz", 180.0)]);
        let text = "aaa\nbbb\nccc\nddd\neee\nfff\nggg\nhhh";
        let result = est.estimate_text(text, true).unwrap();
        assert_eq!(result.unknown_foods.len(), 5);
        assert_eq!(result.unknown_foods, vec!["aaa", "bbb", "ccc", "ddd", "eee"]);
    }

    #[test]
    fn test_custom_cap() {
        let est = estimator_with(&[]).with_max_unknown(2);
        let result = est.estimate_text("aaa + bbb + ccc", true).unwrap();
        assert_eq!(result.unknown_foods.len(), 2);
    }

    #[test]
    fn test_unknowns_deduplicated_across_slots() {
        let est = estimator_with(&[]);
        let meals = MealTexts {
            breakfast: "Galette.".into(),
            snack: "galette".into(),
            ..Default::default()
        };
        let result = est.estimate(&meals, true).unwrap();
        assert_eq!(result.unknown_foods, vec!["galette"]);
    }

    #[test]
    fn test_no_collection_when_disabled() {
        let est = estimator_with(&[]);
        let result = est.estimate_text("galette", false).unwrap();
        assert!(result.unknown_foods.is_empty());
        assert_eq!(result.segments.len(), 1);
    }

    #[test]
    fn test_blank_meals() {
        let est = builtin_estimator();
        let result = est.estimate(&MealTexts::default(), true).unwrap();
        assert_eq!(result, EstimationResult::default());
    }

    #[test]
    fn test_deterministic() {
        let est = builtin_estimator();
        let meals = MealTexts {
            lunch: "3x biscuits + galette + tarte\nyaourt".into(),
            ..Default::default()
        };
        let a = est.estimate(&meals, true).unwrap();
        let b = est.estimate(&meals, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_learned_food_counts() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let est = MealEstimator::new(FoodDictionary::new(store));
        assert_eq!(est.estimate_text("tartine de confiture", false).unwrap().total_calories, 0.0);
        est.dictionary().learn("tartine de confiture", 120.0).unwrap();
        assert_eq!(est.estimate_text("tartine de confiture", false).unwrap().total_calories, 120.0);
    }
}

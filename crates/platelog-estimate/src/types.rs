//! Estimation result types.

use serde::Serialize;

use platelog_store::MealSlot;

/// Portion multiplier and the text left after removing a leading count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuantity {
    pub quantity: f64,
    /// Informational only; matching searches the whole segment.
    pub core: String,
}

/// Best dictionary key found in a segment, with the parsed multiplier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    #[serde(rename = "matchedFood")]
    pub matched_food: Option<&'a str>,
    pub quantity: f64,
}

/// What happened to one segment during an estimation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentOutcome {
    pub slot: MealSlot,
    /// Normalized segment text.
    pub segment: String,
    #[serde(rename = "matchedFood", skip_serializing_if = "Option::is_none")]
    pub matched_food: Option<String>,
    pub quantity: f64,
    /// Contribution to the total; 0 when nothing matched.
    pub calories: f64,
}

/// Total calories plus the foods we could not recognize.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EstimationResult {
    #[serde(rename = "totalCalories")]
    pub total_calories: f64,
    /// Distinct unmatched normalized segments, first-seen order, capped.
    /// Always empty when unknown collection was disabled.
    #[serde(rename = "unknownFoods")]
    pub unknown_foods: Vec<String>,
    pub segments: Vec<SegmentOutcome>,
}

impl EstimationResult {
    /// Total rounded to whole kcal, the value stored per day.
    pub fn rounded_total(&self) -> i64 {
        self.total_calories.round() as i64
    }

    pub fn has_unknown_foods(&self) -> bool {
        !self.unknown_foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_total() {
        let result = EstimationResult {
            total_calories: 242.5,
            ..Default::default()
        };
        assert_eq!(result.rounded_total(), 243);
    }

    #[test]
    fn test_result_shape() {
        let result = EstimationResult {
            total_calories: 90.0,
            unknown_foods: vec!["galette".into()],
            segments: Vec::new(),
        };
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v["totalCalories"], 90.0);
        assert_eq!(v["unknownFoods"][0], "galette");
    }
}

//! Persisted record types and the storage keys they live under.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every collection the application persists, one key each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Weights,
    Meals,
    Program,
    Workouts,
    Profile,
    Preferences,
    Calories,
    FoodsCustom,
    BodyComp,
    Cardio,
}

impl StorageKey {
    pub fn all() -> &'static [StorageKey] {
        &[
            Self::Weights,
            Self::Meals,
            Self::Program,
            Self::Workouts,
            Self::Profile,
            Self::Preferences,
            Self::Calories,
            Self::FoodsCustom,
            Self::BodyComp,
            Self::Cardio,
        ]
    }

    /// Key used in the backing store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weights => "ss_weights",
            Self::Meals => "ss_meals",
            Self::Program => "ss_program",
            Self::Workouts => "ss_workouts",
            Self::Profile => "ss_profile",
            Self::Preferences => "ss_preferences",
            Self::Calories => "ss_calories",
            Self::FoodsCustom => "ss_foods_custom",
            Self::BodyComp => "ss_body_comp",
            Self::Cardio => "ss_cardio",
        }
    }

    /// Field name used for this collection in the JSON export.
    pub fn export_name(&self) -> &'static str {
        match self {
            Self::Weights => "weights",
            Self::Meals => "meals",
            Self::Program => "program",
            Self::Workouts => "workouts",
            Self::Profile => "profile",
            Self::Preferences => "preferences",
            Self::Calories => "calories",
            Self::FoodsCustom => "foodsCustom",
            Self::BodyComp => "bodyComp",
            Self::Cardio => "cardio",
        }
    }

    /// Array collections export as `[]` when empty; object records as `null`.
    pub fn is_collection(&self) -> bool {
        !matches!(self, Self::Profile | Self::Preferences | Self::FoodsCustom)
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four daily meal slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    #[serde(rename = "petit-dejeuner")]
    Breakfast,
    #[serde(rename = "dejeuner")]
    Lunch,
    #[serde(rename = "diner")]
    Dinner,
    #[serde(rename = "collation")]
    Snack,
}

impl MealSlot {
    pub fn all() -> &'static [MealSlot] {
        &[Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl std::str::FromStr for MealSlot {
    type Err = platelog_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "petit-dejeuner" => Ok(Self::Breakfast),
            "lunch" | "dejeuner" => Ok(Self::Lunch),
            "dinner" | "diner" => Ok(Self::Dinner),
            "snack" | "collation" => Ok(Self::Snack),
            other => Err(platelog_core::Error::NotFound(format!("meal slot '{}'", other))),
        }
    }
}

/// Raw meal text for one day, one string per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTexts {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

impl MealTexts {
    pub fn get(&self, slot: MealSlot) -> &str {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snack,
        }
    }

    pub fn set(&mut self, slot: MealSlot, text: impl Into<String>) {
        let text = text.into();
        match slot {
            MealSlot::Breakfast => self.breakfast = text,
            MealSlot::Lunch => self.lunch = text,
            MealSlot::Dinner => self.dinner = text,
            MealSlot::Snack => self.snack = text,
        }
    }

    /// Slots in estimation order.
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &str)> {
        MealSlot::all().iter().map(move |slot| (*slot, self.get(*slot)))
    }
}

/// A stored meal text for one slot on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    pub date: NaiveDate,
    #[serde(rename = "mealType")]
    pub meal_type: MealSlot,
    pub text: String,
}

/// Calorie total recorded for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaloriesEntry {
    pub date: NaiveDate,
    pub calories: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_slot_wire_names() {
        let json = serde_json::to_string(&MealSlot::Breakfast).unwrap();
        assert_eq!(json, "\"petit-dejeuner\"");
        let slot: MealSlot = serde_json::from_str("\"collation\"").unwrap();
        assert_eq!(slot, MealSlot::Snack);
    }

    #[test]
    fn test_meal_slot_from_str() {
        assert_eq!("Lunch".parse::<MealSlot>().unwrap(), MealSlot::Lunch);
        assert_eq!("diner".parse::<MealSlot>().unwrap(), MealSlot::Dinner);
        assert!("brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn test_meal_entry_shape() {
        let entry = MealEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            meal_type: MealSlot::Lunch,
            text: "riz + poulet".into(),
        };
        let v = serde_json::to_value(&entry).unwrap();
        assert_eq!(v["date"], "2024-03-09");
        assert_eq!(v["mealType"], "dejeuner");
    }

    #[test]
    fn test_storage_keys_unique() {
        let mut keys: Vec<_> = StorageKey::all().iter().map(|k| k.as_str()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), StorageKey::all().len());
    }
}

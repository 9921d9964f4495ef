//! Food dictionary: built-in table overlaid with foods the user taught us.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::foods::BUILTIN_FOODS;
use platelog_core::{Error, Result};
use platelog_store::{load_json, save_json, KeyValueStore, StorageKey};

/// Lowercase food name -> calories per portion, in insertion order.
///
/// Built-in entries come first in shipped order, then learned entries in
/// the order they were stored. Overriding a key keeps its position.
pub type FoodTable = IndexMap<String, f64>;

/// Two-layer dictionary. Learned entries override built-in ones.
#[derive(Clone)]
pub struct FoodDictionary {
    store: Arc<dyn KeyValueStore>,
    builtin: FoodTable,
}

impl FoodDictionary {
    /// Dictionary over the shipped built-in table.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let builtin = BUILTIN_FOODS
            .iter()
            .map(|(name, kcal)| (name.to_lowercase(), *kcal))
            .collect();
        Self { store, builtin }
    }

    /// Dictionary over a caller-supplied built-in table.
    pub fn with_builtin(
        store: Arc<dyn KeyValueStore>,
        builtin: impl IntoIterator<Item = (String, f64)>,
    ) -> Self {
        let builtin = builtin
            .into_iter()
            .map(|(name, kcal)| (name.to_lowercase(), kcal))
            .collect();
        Self { store, builtin }
    }

    pub fn builtin(&self) -> &FoodTable {
        &self.builtin
    }

    /// The persisted learned layer.
    ///
    /// Stored entries with a blank name or a non-positive value are
    /// skipped; they can only come from hand-edited storage.
    pub fn learned(&self) -> Result<FoodTable> {
        let raw: IndexMap<String, f64> =
            load_json(self.store.as_ref(), StorageKey::FoodsCustom)?.unwrap_or_default();
        let mut learned = FoodTable::new();
        for (name, kcal) in raw {
            if !is_valid_calories(kcal) || name.trim().is_empty() {
                warn!("Ignoring learned food {:?} with {} kcal", name, kcal);
                continue;
            }
            learned.insert(name.to_lowercase(), kcal);
        }
        Ok(learned)
    }

    /// Effective dictionary: built-in entries, then learned entries on top.
    pub fn build(&self) -> Result<FoodTable> {
        let mut table = self.builtin.clone();
        table.extend(self.learned()?);
        Ok(table)
    }

    /// Store `calories_per_portion` for `name` in the learned layer and
    /// persist it before returning.
    pub fn learn(&self, name: &str, calories_per_portion: f64) -> Result<()> {
        if !is_valid_calories(calories_per_portion) {
            return Err(Error::InvalidCalories(calories_per_portion));
        }
        let key = name.to_lowercase();
        if key.trim().is_empty() {
            return Err(Error::InvalidFoodName(name.to_string()));
        }

        let mut raw: IndexMap<String, f64> =
            load_json(self.store.as_ref(), StorageKey::FoodsCustom)?.unwrap_or_default();
        let previous = raw.insert(key.clone(), calories_per_portion);
        save_json(self.store.as_ref(), StorageKey::FoodsCustom, &raw)?;

        match previous {
            Some(old) => info!("Updated food {:?}: {} -> {} kcal", key, old, calories_per_portion),
            None => info!("Learned food {:?}: {} kcal", key, calories_per_portion),
        }
        Ok(())
    }
}

/// Calories must be a finite, strictly positive number.
pub fn is_valid_calories(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

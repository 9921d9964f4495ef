//! Daily meal texts and calorie totals, upserted by date.

use chrono::NaiveDate;
use tracing::info;

use crate::kv::{load_json, save_json, KeyValueStore};
use crate::types::{CaloriesEntry, MealEntry, MealSlot, MealTexts, StorageKey};
use platelog_core::Result;

/// Meal text log, one entry per (date, slot).
pub struct MealLog<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> MealLog<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    pub fn entries(&self) -> Result<Vec<MealEntry>> {
        Ok(load_json(self.store, StorageKey::Meals)?.unwrap_or_default())
    }

    /// Save the text for one slot, replacing any previous text for that day.
    pub fn save(&self, date: NaiveDate, slot: MealSlot, text: &str) -> Result<()> {
        let mut entries = self.entries()?;
        let entry = MealEntry {
            date,
            meal_type: slot,
            text: text.trim().to_string(),
        };
        match entries
            .iter_mut()
            .find(|e| e.date == date && e.meal_type == slot)
        {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
        save_json(self.store, StorageKey::Meals, &entries)
    }

    /// Snapshot of the four slots for a day. Missing slots are empty.
    pub fn texts_for(&self, date: NaiveDate) -> Result<MealTexts> {
        let mut texts = MealTexts::default();
        for entry in self.entries()?.into_iter().filter(|e| e.date == date) {
            texts.set(entry.meal_type, entry.text);
        }
        Ok(texts)
    }
}

/// Daily calorie totals, one entry per date.
pub struct CaloriesLog<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> CaloriesLog<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    pub fn entries(&self) -> Result<Vec<CaloriesEntry>> {
        Ok(load_json(self.store, StorageKey::Calories)?.unwrap_or_default())
    }

    pub fn get(&self, date: NaiveDate) -> Result<Option<i64>> {
        Ok(self
            .entries()?
            .into_iter()
            .find(|e| e.date == date)
            .map(|e| e.calories))
    }

    pub fn record(&self, date: NaiveDate, calories: i64) -> Result<()> {
        let mut entries = self.entries()?;
        let entry = CaloriesEntry { date, calories };
        match entries.iter_mut().find(|e| e.date == date) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
        save_json(self.store, StorageKey::Calories, &entries)?;
        info!("Recorded {} kcal for {}", calories, date);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_meal_save_upserts_by_slot() {
        let store = MemoryStore::new();
        let log = MealLog::new(&store);
        log.save(day(1), MealSlot::Breakfast, "  café ").unwrap();
        log.save(day(1), MealSlot::Breakfast, "café au lait").unwrap();
        log.save(day(1), MealSlot::Lunch, "riz + poulet").unwrap();
        log.save(day(2), MealSlot::Breakfast, "thé").unwrap();

        assert_eq!(log.entries().unwrap().len(), 3);
        let texts = log.texts_for(day(1)).unwrap();
        assert_eq!(texts.breakfast, "café au lait");
        assert_eq!(texts.lunch, "riz + poulet");
        assert_eq!(texts.dinner, "");
    }

    #[test]
    fn test_calories_record_and_get() {
        let store = MemoryStore::new();
        let log = CaloriesLog::new(&store);
        assert_eq!(log.get(day(3)).unwrap(), None);
        log.record(day(3), 1750).unwrap();
        log.record(day(3), 1820).unwrap();
        assert_eq!(log.get(day(3)).unwrap(), Some(1820));
        assert_eq!(log.entries().unwrap().len(), 1);
    }
}

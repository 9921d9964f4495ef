//! Platelog Store: key-value persistence behind a trait, SQLite and
//! in-memory backends, meal/calorie records and JSON export.

pub mod export;
pub mod kv;
pub mod records;
pub mod schema;
pub mod sqlite;
pub mod types;

pub use export::{export_all, write_export, EXPORT_FILENAME};
pub use kv::{load_json, save_json, KeyValueStore, MemoryStore};
pub use records::{CaloriesLog, MealLog};
pub use sqlite::SqliteStore;
pub use types::*;

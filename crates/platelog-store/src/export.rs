//! Whole-application JSON export.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::info;

use crate::kv::{load_json, KeyValueStore};
use crate::types::StorageKey;
use platelog_core::Result;

pub const EXPORT_FILENAME: &str = "platelog-export.json";

/// Build one JSON object with a field per stored collection.
pub fn export_all(store: &dyn KeyValueStore) -> Result<Value> {
    let mut out = Map::new();
    for key in StorageKey::all() {
        let value: Option<Value> = load_json(store, *key)?;
        let value = match value {
            Some(v) => v,
            None if key.is_collection() => Value::Array(Vec::new()),
            None => Value::Null,
        };
        out.insert(key.export_name().to_string(), value);
    }
    Ok(Value::Object(out))
}

/// Write the export, pretty-printed, into `dir`. Returns the file path.
pub fn write_export(store: &dyn KeyValueStore, dir: &Path) -> Result<PathBuf> {
    let data = export_all(store)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILENAME);
    std::fs::write(&path, serde_json::to_string_pretty(&data)?)?;
    info!("Exported data to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_export_defaults() {
        let store = MemoryStore::new();
        let data = export_all(&store).unwrap();
        assert_eq!(data["weights"], serde_json::json!([]));
        assert_eq!(data["calories"], serde_json::json!([]));
        assert!(data["profile"].is_null());
        assert!(data["foodsCustom"].is_null());
        assert_eq!(data.as_object().unwrap().len(), StorageKey::all().len());
    }

    #[test]
    fn test_export_includes_learned_foods() {
        let store = MemoryStore::new();
        store
            .set(StorageKey::FoodsCustom.as_str(), "{\"tartine de confiture\":120}")
            .unwrap();
        let data = export_all(&store).unwrap();
        assert_eq!(data["foodsCustom"]["tartine de confiture"], 120);
    }

    #[test]
    fn test_write_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::new();
        let path = write_export(&store, dir.path()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        let v: Value = serde_json::from_str(&text).unwrap();
        assert!(v.get("meals").is_some());
    }
}

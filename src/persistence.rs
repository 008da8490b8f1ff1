// Durable mirror for the record stores. Stores know nothing about storage;
// the adapter serializes each collection into a schema-versioned slot and
// hydrates it back, degrading to the seed collection on any failure. A
// corrupt or missing slot must never take the application down.

use crate::error::VitroLabError;
use crate::records::DomainRecord;
use crate::storage_keys::StoreKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub const SLOT_SCHEMA: &str = "vitrolab.slot.v1";

/// Key-value facility a slot lives in. The browser original used local
/// storage; here a directory of files or an in-memory map stands in.
pub trait StorageBackend {
    /// `Ok(None)` when the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, VitroLabError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), VitroLabError>;
}

/// One file per slot under a data directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, VitroLabError> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), VitroLabError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, VitroLabError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), VitroLabError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Models an absent storage facility (private browsing, disabled storage):
/// every access reports unavailable, which the adapter absorbs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledStorage;

impl StorageBackend for DisabledStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, VitroLabError> {
        Err(VitroLabError::StorageUnavailable(
            "storage facility is disabled".to_string(),
        ))
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), VitroLabError> {
        Err(VitroLabError::StorageUnavailable(
            "storage facility is disabled".to_string(),
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Slot<R> {
    schema: String,
    saved_at_unix_ms: u128,
    record_count: usize,
    records: Vec<R>,
}

fn now_unix_ms() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[derive(Clone, Debug)]
pub struct PersistenceAdapter<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PersistenceAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Serializes the collection into its slot. Loss of durability is
    /// recoverable-by-reseed, so failures are logged, never returned.
    pub fn save<R: DomainRecord>(&mut self, key: StoreKey, records: &[R]) {
        let slot = Slot {
            schema: SLOT_SCHEMA.to_string(),
            saved_at_unix_ms: now_unix_ms(),
            record_count: records.len(),
            records: records.to_vec(),
        };
        let text = match serde_json::to_string(&slot) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("could not serialize slot '{}': {e}", key.slot_name());
                return;
            }
        };
        if let Err(e) = self.backend.write(key.slot_name(), &text) {
            tracing::warn!("could not persist slot '{}': {e}", key.slot_name());
        }
    }

    /// Hydrates the collection from its slot, falling back to `seed` when
    /// the slot is absent, unreadable, from an unknown schema, or corrupt.
    pub fn load<R: DomainRecord>(&self, key: StoreKey, seed: Vec<R>) -> Vec<R> {
        let slot_name = key.slot_name();
        let text = match self.backend.read(slot_name) {
            Ok(Some(text)) => text,
            Ok(None) => return seed,
            Err(e) => {
                tracing::warn!("could not read slot '{slot_name}', using seed data: {e}");
                return seed;
            }
        };
        match serde_json::from_str::<Slot<R>>(&text) {
            Ok(slot) if slot.schema == SLOT_SCHEMA => slot.records,
            Ok(slot) => {
                tracing::warn!(
                    "slot '{slot_name}' carries unknown schema '{}', using seed data",
                    slot.schema
                );
                seed
            }
            // The browser original persisted bare arrays with no envelope.
            Err(_) => match serde_json::from_str::<Vec<R>>(&text) {
                Ok(records) => records,
                Err(e) => {
                    let err = VitroLabError::StorageCorrupt {
                        key: slot_name,
                        message: e.to_string(),
                    };
                    tracing::warn!("{err}, using seed data");
                    seed
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MediaBatchRecord;
    use crate::status::Status;
    use tempfile::tempdir;

    fn batch(id: &str) -> MediaBatchRecord {
        MediaBatchRecord {
            id: id.to_string(),
            prep_date: "2024-11-18".into(),
            media_type: "MS Medium".into(),
            quantity: "5L".into(),
            p_h: "5.8".into(),
            prepared_by: "Rajesh Kumar".into(),
            status: Status::Active,
        }
    }

    fn seed() -> Vec<MediaBatchRecord> {
        vec![batch("MB-SEED-001")]
    }

    #[test]
    fn save_then_load_round_trips_field_for_field() {
        let mut adapter = PersistenceAdapter::new(MemoryStorage::new());
        let collection = vec![batch("MB-2024-001"), batch("MB-2024-002")];
        adapter.save(StoreKey::MediaBatch, &collection);
        let loaded = adapter.load(StoreKey::MediaBatch, seed());
        assert_eq!(loaded, collection);
    }

    #[test]
    fn absent_slot_falls_back_to_seed() {
        let adapter = PersistenceAdapter::new(MemoryStorage::new());
        let loaded = adapter.load(StoreKey::MediaBatch, seed());
        assert_eq!(loaded, seed());
    }

    #[test]
    fn corrupt_slot_falls_back_to_seed_without_panicking() {
        let mut backend = MemoryStorage::new();
        backend
            .write(StoreKey::MediaBatch.slot_name(), "{not json at all")
            .unwrap();
        let adapter = PersistenceAdapter::new(backend);
        let loaded = adapter.load(StoreKey::MediaBatch, seed());
        assert_eq!(loaded, seed());
    }

    #[test]
    fn unknown_schema_falls_back_to_seed() {
        let mut backend = MemoryStorage::new();
        backend
            .write(
                StoreKey::MediaBatch.slot_name(),
                r#"{"schema":"vitrolab.slot.v99","saved_at_unix_ms":0,"record_count":0,"records":[]}"#,
            )
            .unwrap();
        let adapter = PersistenceAdapter::new(backend);
        let loaded = adapter.load(StoreKey::MediaBatch, seed());
        assert_eq!(loaded, seed());
    }

    #[test]
    fn legacy_bare_array_slot_still_loads() {
        let legacy = r#"[{
            "id": "MB-2024-001",
            "prepDate": "2024-11-18",
            "mediaType": "MS Medium",
            "quantity": "5L",
            "pH": "5.8",
            "preparedBy": "Rajesh Kumar",
            "status": "active"
        }]"#;
        let mut backend = MemoryStorage::new();
        backend
            .write(StoreKey::MediaBatch.slot_name(), legacy)
            .unwrap();
        let adapter = PersistenceAdapter::new(backend);
        let loaded = adapter.load(StoreKey::MediaBatch, seed());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "MB-2024-001");
    }

    #[test]
    fn disabled_storage_degrades_to_seed_and_swallows_saves() {
        let mut adapter = PersistenceAdapter::new(DisabledStorage);
        adapter.save(StoreKey::MediaBatch, &[batch("MB-2024-001")]);
        let loaded = adapter.load(StoreKey::MediaBatch, seed());
        assert_eq!(loaded, seed());
    }

    #[test]
    fn file_storage_round_trips_across_adapters() {
        let td = tempdir().unwrap();
        let collection = vec![batch("MB-2024-001")];

        let mut writer = PersistenceAdapter::new(FileStorage::new(td.path()));
        writer.save(StoreKey::MediaBatch, &collection);

        // A fresh adapter over the same directory sees the data, the way a
        // restarted process would.
        let reader = PersistenceAdapter::new(FileStorage::new(td.path()));
        let loaded = reader.load(StoreKey::MediaBatch, seed());
        assert_eq!(loaded, collection);
    }

    #[test]
    fn slots_are_keyed_independently() {
        let mut adapter = PersistenceAdapter::new(MemoryStorage::new());
        adapter.save(StoreKey::MediaBatch, &[batch("MB-2024-001")]);
        // A different store's slot is untouched.
        let loaded = adapter.load(StoreKey::Autoclave, Vec::<MediaBatchRecord>::new());
        assert!(loaded.is_empty());
    }
}

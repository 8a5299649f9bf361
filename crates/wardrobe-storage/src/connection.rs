//! Database handle: open, pragmas, schema init, and trait impls that
//! expose the store to the engine crate.

use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use wardrobe_core::{
    FeedbackSink, Garment, GarmentId, GarmentSource, Outfit, PenaltyStore, StorageError, Verdict,
    WeightKey, WeightSnapshot, WeightStore,
};

use crate::queries;
use crate::schema;

/// Owning handle over the SQLite connection. Single-writer,
/// single-threaded; the engine crates only see the core traits.
pub struct WardrobeDb {
    conn: Connection,
}

impl WardrobeDb {
    /// Open (or create) the database at `path`, creating parent
    /// directories and initializing the schema as needed.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StorageError::SqliteError {
                    message: format!("failed to create '{}': {e}", parent.display()),
                })?;
            }
        }
        let conn = Connection::open(path)
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        schema::initialize(&conn)?;
        debug!(path = %path.display(), "wardrobe database opened");
        Ok(Self { conn })
    }

    /// In-memory database for tests.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl GarmentSource for WardrobeDb {
    fn garment(&self, id: GarmentId) -> Result<Garment, StorageError> {
        queries::garments::get_garment(&self.conn, id)
    }
}

impl WeightStore for WardrobeDb {
    fn weight(&self, key: WeightKey) -> Result<f64, StorageError> {
        queries::weights::get_weight(&self.conn, key)
    }

    fn set_weight(&self, key: WeightKey, value: f64) -> Result<f64, StorageError> {
        queries::weights::set_weight(&self.conn, key, value)
    }

    fn adjust_weight(&self, key: WeightKey, delta: f64) -> Result<f64, StorageError> {
        queries::weights::adjust_weight(&self.conn, key, delta)
    }

    fn reset_weight(&self, key: WeightKey) -> Result<f64, StorageError> {
        queries::weights::reset_weight(&self.conn, key)
    }

    fn reset_all_weights(&self) -> Result<(), StorageError> {
        queries::weights::reset_all_weights(&self.conn)
    }

    fn weight_snapshot(&self) -> Result<WeightSnapshot, StorageError> {
        let mut snapshot = WeightSnapshot::default();
        for (key, value) in queries::weights::get_all_weights(&self.conn)? {
            snapshot.set(key, value);
        }
        Ok(snapshot)
    }
}

impl PenaltyStore for WardrobeDb {
    fn item_penalty(&self, id: GarmentId) -> Result<f64, StorageError> {
        queries::penalties::item_penalty(&self.conn, id)
    }

    fn add_item_penalty(&self, id: GarmentId, delta: f64) -> Result<f64, StorageError> {
        queries::penalties::add_item_penalty(&self.conn, id, delta)
    }

    fn pair_penalty(&self, a: GarmentId, b: GarmentId) -> Result<f64, StorageError> {
        queries::penalties::pair_penalty(&self.conn, a, b)
    }

    fn add_pair_penalty(
        &self,
        a: GarmentId,
        b: GarmentId,
        delta: f64,
    ) -> Result<f64, StorageError> {
        queries::penalties::add_pair_penalty(&self.conn, a, b, delta)
    }
}

impl FeedbackSink for WardrobeDb {
    fn append_feedback(&self, outfit: &Outfit, verdict: &Verdict) -> Result<i64, StorageError> {
        queries::feedback::append_feedback(&self.conn, outfit, verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_core::WeightSnapshot;

    #[test]
    fn test_open_creates_file_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("wardrobe.db");
        let db = WardrobeDb::open(&path).unwrap();
        assert!(path.exists());
        let snapshot = db.weight_snapshot().unwrap();
        assert_eq!(snapshot, WeightSnapshot::default());
    }

    #[test]
    fn test_reopen_preserves_learned_weights() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wardrobe.db");
        {
            let db = WardrobeDb::open(&path).unwrap();
            db.set_weight(WeightKey::ColorWeight, 0.7).unwrap();
        }
        let db = WardrobeDb::open(&path).unwrap();
        assert_eq!(db.weight(WeightKey::ColorWeight).unwrap(), 0.7);
    }
}

//! Schema initialization and weight seeding.

use rusqlite::Connection;
use wardrobe_core::{StorageError, WeightKey};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS garments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    layer_role TEXT NOT NULL CHECK(layer_role IN ('base', 'mid', 'outer', 'none')),
    color_hex TEXT NOT NULL,
    color_lab_l REAL NOT NULL,
    color_lab_a REAL NOT NULL,
    color_lab_b REAL NOT NULL,
    pattern TEXT NOT NULL,
    warmth INTEGER NOT NULL CHECK(warmth >= 1 AND warmth <= 10),
    formality INTEGER NOT NULL CHECK(formality >= 1 AND formality <= 10),
    season_tags TEXT NOT NULL DEFAULT '',
    occasion_tags TEXT NOT NULL DEFAULT '',
    active INTEGER NOT NULL DEFAULT 1 CHECK(active IN (0, 1))
);

CREATE TABLE IF NOT EXISTS weights (
    key TEXT PRIMARY KEY,
    value REAL NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
);

CREATE TABLE IF NOT EXISTS item_penalties (
    garment_id INTEGER PRIMARY KEY,
    value REAL NOT NULL DEFAULT 0,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
);

CREATE TABLE IF NOT EXISTS pair_penalties (
    id_low INTEGER NOT NULL,
    id_high INTEGER NOT NULL,
    value REAL NOT NULL DEFAULT 0,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now')),
    PRIMARY KEY (id_low, id_high),
    CHECK (id_low <= id_high)
);

CREATE TABLE IF NOT EXISTS feedback (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    shoes_id INTEGER NOT NULL,
    bottom_id INTEGER NOT NULL,
    base_top_id INTEGER NOT NULL,
    mid_top_id INTEGER,
    outerwear_id INTEGER,
    signature TEXT NOT NULL,
    verdict INTEGER NOT NULL CHECK(verdict IN (0, 1)),
    reason TEXT,
    created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_garments_category ON garments(category);
CREATE INDEX IF NOT EXISTS idx_garments_layer_role ON garments(layer_role);
CREATE INDEX IF NOT EXISTS idx_feedback_signature ON feedback(signature);
";

/// Create all tables and seed missing weight rows with their defaults.
pub fn initialize(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(SCHEMA)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    seed_weights(conn)
}

/// Insert default values for any weight key not yet present. Existing
/// rows are left untouched so learned values survive restarts.
pub fn seed_weights(conn: &Connection) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached("INSERT OR IGNORE INTO weights (key, value) VALUES (?1, ?2)")
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    for key in WeightKey::ALL {
        stmt.execute(rusqlite::params![key.name(), key.spec().default])
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        initialize(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM weights", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, WeightKey::ALL.len() as i64);
    }

    #[test]
    fn test_seed_does_not_overwrite_learned_values() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn.execute(
            "UPDATE weights SET value = 0.42 WHERE key = 'color_weight'",
            [],
        )
        .unwrap();
        seed_weights(&conn).unwrap();
        let value: f64 = conn
            .query_row(
                "SELECT value FROM weights WHERE key = 'color_weight'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(value, 0.42);
    }
}

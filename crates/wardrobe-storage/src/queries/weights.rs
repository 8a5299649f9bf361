//! weights table queries. Every write clamps to the key's [min, max].

use rusqlite::{params, Connection};
use tracing::debug;
use wardrobe_core::{StorageError, WeightKey};

fn map_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError { message: e.to_string() }
}

pub fn get_weight(conn: &Connection, key: WeightKey) -> Result<f64, StorageError> {
    conn.query_row(
        "SELECT value FROM weights WHERE key = ?1",
        params![key.name()],
        |row| row.get(0),
    )
    .map_err(|e| match e {
        // Seeded on open; a missing row means an unseeded database.
        rusqlite::Error::QueryReturnedNoRows => StorageError::UnknownWeightKey {
            key: key.name().to_string(),
        },
        other => map_err(other),
    })
}

pub fn get_all_weights(conn: &Connection) -> Result<Vec<(WeightKey, f64)>, StorageError> {
    let mut result = Vec::with_capacity(WeightKey::ALL.len());
    for key in WeightKey::ALL {
        result.push((key, get_weight(conn, key)?));
    }
    Ok(result)
}

/// Store a value, clamped into range; returns the stored value.
pub fn set_weight(conn: &Connection, key: WeightKey, value: f64) -> Result<f64, StorageError> {
    let clamped = key.clamp(value);
    conn.execute(
        "UPDATE weights SET value = ?2, updated_at = strftime('%s', 'now') WHERE key = ?1",
        params![key.name(), clamped],
    )
    .map_err(map_err)?;
    Ok(clamped)
}

/// Read-add-clamp-write; returns the new stored value.
pub fn adjust_weight(conn: &Connection, key: WeightKey, delta: f64) -> Result<f64, StorageError> {
    let current = get_weight(conn, key)?;
    let updated = set_weight(conn, key, current + delta)?;
    debug!(key = %key, current, delta, updated, "weight adjusted");
    Ok(updated)
}

/// Restore a single weight to its default; returns the default.
pub fn reset_weight(conn: &Connection, key: WeightKey) -> Result<f64, StorageError> {
    set_weight(conn, key, key.spec().default)
}

pub fn reset_all_weights(conn: &Connection) -> Result<(), StorageError> {
    for key in WeightKey::ALL {
        reset_weight(conn, key)?;
    }
    Ok(())
}

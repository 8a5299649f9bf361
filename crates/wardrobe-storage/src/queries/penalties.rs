//! item_penalties and pair_penalties table queries.
//!
//! Penalties accumulate: a new delta always adds to the stored value.
//! Pair keys are canonicalized as (min id, max id) so both argument
//! orders hit the same row.

use rusqlite::{params, Connection};
use wardrobe_core::{canonical_pair, GarmentId, StorageError};

fn map_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError { message: e.to_string() }
}

/// Accumulated penalty for one garment; 0 when never penalized.
pub fn item_penalty(conn: &Connection, id: GarmentId) -> Result<f64, StorageError> {
    conn.query_row(
        "SELECT value FROM item_penalties WHERE garment_id = ?1",
        params![id],
        |row| row.get(0),
    )
    .or_else(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => Ok(0.0),
        other => Err(map_err(other)),
    })
}

/// Add a delta to a garment's accumulated penalty; returns the new total.
pub fn add_item_penalty(
    conn: &Connection,
    id: GarmentId,
    delta: f64,
) -> Result<f64, StorageError> {
    conn.execute(
        "INSERT INTO item_penalties (garment_id, value, updated_at)
         VALUES (?1, ?2, strftime('%s', 'now'))
         ON CONFLICT(garment_id)
         DO UPDATE SET value = value + ?2, updated_at = strftime('%s', 'now')",
        params![id, delta],
    )
    .map_err(map_err)?;
    item_penalty(conn, id)
}

/// Accumulated penalty for an unordered garment pair; 0 when absent.
pub fn pair_penalty(
    conn: &Connection,
    a: GarmentId,
    b: GarmentId,
) -> Result<f64, StorageError> {
    let (low, high) = canonical_pair(a, b);
    conn.query_row(
        "SELECT value FROM pair_penalties WHERE id_low = ?1 AND id_high = ?2",
        params![low, high],
        |row| row.get(0),
    )
    .or_else(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => Ok(0.0),
        other => Err(map_err(other)),
    })
}

/// Add a delta to a pair's accumulated penalty; returns the new total.
pub fn add_pair_penalty(
    conn: &Connection,
    a: GarmentId,
    b: GarmentId,
    delta: f64,
) -> Result<f64, StorageError> {
    let (low, high) = canonical_pair(a, b);
    conn.execute(
        "INSERT INTO pair_penalties (id_low, id_high, value, updated_at)
         VALUES (?1, ?2, ?3, strftime('%s', 'now'))
         ON CONFLICT(id_low, id_high)
         DO UPDATE SET value = value + ?3, updated_at = strftime('%s', 'now')",
        params![low, high, delta],
    )
    .map_err(map_err)?;
    pair_penalty(conn, low, high)
}

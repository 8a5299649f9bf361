//! feedback table queries. History is append-only; the adaptor never
//! mutates or deletes records.

use rusqlite::{params, Connection};
use wardrobe_core::{GarmentId, Outfit, StorageError, Verdict};

fn map_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError { message: e.to_string() }
}

/// A stored feedback record.
#[derive(Debug, Clone)]
pub struct FeedbackRecord {
    pub id: i64,
    pub shoes_id: GarmentId,
    pub bottom_id: GarmentId,
    pub base_top_id: GarmentId,
    pub mid_top_id: Option<GarmentId>,
    pub outerwear_id: Option<GarmentId>,
    pub signature: String,
    pub verdict: i64,
    pub reason: Option<String>,
    pub created_at: i64,
}

/// Append a validated verdict for an outfit; returns the record id.
pub fn append_feedback(
    conn: &Connection,
    outfit: &Outfit,
    verdict: &Verdict,
) -> Result<i64, StorageError> {
    let (flag, reason) = verdict.to_parts();
    conn.execute(
        "INSERT INTO feedback
         (shoes_id, bottom_id, base_top_id, mid_top_id, outerwear_id, signature, verdict, reason)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            outfit.shoes,
            outfit.bottom,
            outfit.base_top,
            outfit.mid_top,
            outfit.outerwear,
            outfit.signature(),
            flag,
            reason,
        ],
    )
    .map_err(map_err)?;
    Ok(conn.last_insert_rowid())
}

/// All feedback, newest first.
pub fn list_feedback(conn: &Connection) -> Result<Vec<FeedbackRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, shoes_id, bottom_id, base_top_id, mid_top_id, outerwear_id,
                    signature, verdict, reason, created_at
             FROM feedback ORDER BY id DESC",
        )
        .map_err(map_err)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(FeedbackRecord {
                id: row.get(0)?,
                shoes_id: row.get(1)?,
                bottom_id: row.get(2)?,
                base_top_id: row.get(3)?,
                mid_top_id: row.get(4)?,
                outerwear_id: row.get(5)?,
                signature: row.get(6)?,
                verdict: row.get(7)?,
                reason: row.get(8)?,
                created_at: row.get(9)?,
            })
        })
        .map_err(map_err)?;
    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(map_err)?);
    }
    Ok(result)
}

/// External CRUD: remove a record by id. Not called by the adaptor.
pub fn delete_feedback(conn: &Connection, id: i64) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM feedback WHERE id = ?1", params![id])
        .map_err(map_err)
}

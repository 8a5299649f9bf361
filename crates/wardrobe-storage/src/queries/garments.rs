//! garments table queries.

use rusqlite::{params, Connection, Row};
use wardrobe_core::{Garment, GarmentId, LabColor, LayerRole, StorageError};

/// Insert payload for a new garment; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewGarment {
    pub name: String,
    pub category: String,
    pub layer_role: LayerRole,
    pub color_hex: String,
    pub color: LabColor,
    pub pattern: String,
    pub warmth: u8,
    pub formality: u8,
    pub season_tags: String,
    pub occasion_tags: String,
    pub active: bool,
}

/// A tagged, known-field update. Each variant maps to a fixed SQL
/// statement; no column name is ever substituted into a query.
#[derive(Debug, Clone)]
pub enum GarmentField {
    Name(String),
    Category(String),
    LayerRole(LayerRole),
    Color { hex: String, lab: LabColor },
    Pattern(String),
    Warmth(u8),
    Formality(u8),
    SeasonTags(String),
    OccasionTags(String),
}

fn map_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError { message: e.to_string() }
}

fn row_to_garment(row: &Row<'_>) -> rusqlite::Result<Garment> {
    let role: String = row.get(3)?;
    Ok(Garment {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        layer_role: LayerRole::parse(&role).unwrap_or(LayerRole::None),
        color_hex: row.get(4)?,
        color: LabColor {
            l: row.get(5)?,
            a: row.get(6)?,
            b: row.get(7)?,
        },
        pattern: row.get(8)?,
        warmth: row.get(9)?,
        formality: row.get(10)?,
        season_tags: row.get(11)?,
        occasion_tags: row.get(12)?,
        active: row.get::<_, i64>(13)? != 0,
    })
}

const GARMENT_COLUMNS: &str = "id, name, category, layer_role, color_hex, color_lab_l, \
     color_lab_a, color_lab_b, pattern, warmth, formality, season_tags, occasion_tags, active";

/// Insert a garment and return its assigned id.
pub fn insert_garment(conn: &Connection, garment: &NewGarment) -> Result<GarmentId, StorageError> {
    conn.execute(
        "INSERT INTO garments
         (name, category, layer_role, color_hex, color_lab_l, color_lab_a, color_lab_b,
          pattern, warmth, formality, season_tags, occasion_tags, active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            garment.name,
            garment.category,
            garment.layer_role.name(),
            garment.color_hex,
            garment.color.l,
            garment.color.a,
            garment.color.b,
            garment.pattern,
            garment.warmth,
            garment.formality,
            garment.season_tags,
            garment.occasion_tags,
            garment.active as i64,
        ],
    )
    .map_err(map_err)?;
    Ok(conn.last_insert_rowid())
}

/// Fetch a garment by id; missing ids are a hard NotFound.
pub fn get_garment(conn: &Connection, id: GarmentId) -> Result<Garment, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("SELECT {GARMENT_COLUMNS} FROM garments WHERE id = ?1"))
        .map_err(map_err)?;
    stmt.query_row(params![id], row_to_garment)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => StorageError::GarmentNotFound { id },
            other => map_err(other),
        })
}

/// List all garments, optionally including inactive ones.
pub fn list_garments(conn: &Connection, include_inactive: bool) -> Result<Vec<Garment>, StorageError> {
    let sql = if include_inactive {
        format!("SELECT {GARMENT_COLUMNS} FROM garments ORDER BY id")
    } else {
        format!("SELECT {GARMENT_COLUMNS} FROM garments WHERE active = 1 ORDER BY id")
    };
    collect_garments(conn, &sql, params![])
}

pub fn get_garments_by_category(
    conn: &Connection,
    category: &str,
    active_only: bool,
) -> Result<Vec<Garment>, StorageError> {
    let sql = if active_only {
        format!("SELECT {GARMENT_COLUMNS} FROM garments WHERE category = ?1 AND active = 1 ORDER BY id")
    } else {
        format!("SELECT {GARMENT_COLUMNS} FROM garments WHERE category = ?1 ORDER BY id")
    };
    collect_garments(conn, &sql, params![category])
}

pub fn get_garments_by_layer(
    conn: &Connection,
    layer_role: LayerRole,
    active_only: bool,
) -> Result<Vec<Garment>, StorageError> {
    let sql = if active_only {
        format!("SELECT {GARMENT_COLUMNS} FROM garments WHERE layer_role = ?1 AND active = 1 ORDER BY id")
    } else {
        format!("SELECT {GARMENT_COLUMNS} FROM garments WHERE layer_role = ?1 ORDER BY id")
    };
    collect_garments(conn, &sql, params![layer_role.name()])
}

fn collect_garments(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<Garment>, StorageError> {
    let mut stmt = conn.prepare_cached(sql).map_err(map_err)?;
    let rows = stmt.query_map(params, row_to_garment).map_err(map_err)?;
    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(map_err)?);
    }
    Ok(result)
}

/// Set the active flag; returns how many rows changed (0 or 1).
pub fn set_active(conn: &Connection, id: GarmentId, active: bool) -> Result<usize, StorageError> {
    conn.execute(
        "UPDATE garments SET active = ?2 WHERE id = ?1",
        params![id, active as i64],
    )
    .map_err(map_err)
}

pub fn delete_garment(conn: &Connection, id: GarmentId) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM garments WHERE id = ?1", params![id])
        .map_err(map_err)
}

/// Apply a tagged field update. Returns how many rows changed.
pub fn update_garment_field(
    conn: &Connection,
    id: GarmentId,
    field: GarmentField,
) -> Result<usize, StorageError> {
    let changed = match field {
        GarmentField::Name(v) => conn.execute(
            "UPDATE garments SET name = ?2 WHERE id = ?1",
            params![id, v],
        ),
        GarmentField::Category(v) => conn.execute(
            "UPDATE garments SET category = ?2 WHERE id = ?1",
            params![id, v],
        ),
        GarmentField::LayerRole(v) => conn.execute(
            "UPDATE garments SET layer_role = ?2 WHERE id = ?1",
            params![id, v.name()],
        ),
        GarmentField::Color { hex, lab } => conn.execute(
            "UPDATE garments SET color_hex = ?2, color_lab_l = ?3, color_lab_a = ?4,
             color_lab_b = ?5 WHERE id = ?1",
            params![id, hex, lab.l, lab.a, lab.b],
        ),
        GarmentField::Pattern(v) => conn.execute(
            "UPDATE garments SET pattern = ?2 WHERE id = ?1",
            params![id, v],
        ),
        GarmentField::Warmth(v) => conn.execute(
            "UPDATE garments SET warmth = ?2 WHERE id = ?1",
            params![id, v],
        ),
        GarmentField::Formality(v) => conn.execute(
            "UPDATE garments SET formality = ?2 WHERE id = ?1",
            params![id, v],
        ),
        GarmentField::SeasonTags(v) => conn.execute(
            "UPDATE garments SET season_tags = ?2 WHERE id = ?1",
            params![id, v],
        ),
        GarmentField::OccasionTags(v) => conn.execute(
            "UPDATE garments SET occasion_tags = ?2 WHERE id = ?1",
            params![id, v],
        ),
    };
    changed.map_err(map_err)
}

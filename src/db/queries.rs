use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::InventoryItem;
use crate::models::item::DATE_FORMAT;
use chrono::NaiveDate;
use rusqlite::{Result, Row, params};

pub fn map_row(row: &Row) -> Result<InventoryItem> {
    let date_str: String = row.get("expiry_date")?;

    let expiry_date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(InventoryItem {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        quantity: row.get("quantity")?,
        unit: row.get("unit")?,
        expiry_date,
    })
}

/// Insert an item and return the id assigned by SQLite.
pub fn insert_item(pool: &mut DbPool, item: &InventoryItem) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO inventory (name, quantity, unit, expiry_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![item.name, item.quantity, item.unit, item.expiry_str()],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn load_items(pool: &mut DbPool) -> AppResult<Vec<InventoryItem>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, name, quantity, unit, expiry_date FROM inventory ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Returns the number of rows removed (0 or 1).
pub fn delete_item(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    let n = pool
        .conn
        .execute("DELETE FROM inventory WHERE id = ?1", [id])?;
    Ok(n)
}

use rusqlite::{Connection, OptionalExtension, Result};
use tracing::{debug, info};

/// Check if the `inventory` table exists.
fn inventory_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='inventory'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `inventory` table has a `unit` column.
fn inventory_has_unit_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('inventory')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "unit" {
            return Ok(true);
        }
    }
    Ok(false)
}

fn create_inventory_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS inventory (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            quantity    INTEGER NOT NULL,
            unit        TEXT NOT NULL,
            expiry_date TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_inventory_expiry ON inventory(expiry_date);
        "#,
    )?;
    Ok(())
}

/// Databases created before units were tracked lack the column.
fn migrate_add_unit_column(conn: &Connection) -> Result<()> {
    info!("adding 'unit' column to inventory table");
    conn.execute_batch(
        r#"
        ALTER TABLE inventory ADD COLUMN unit TEXT NOT NULL DEFAULT 'g';
        CREATE INDEX IF NOT EXISTS idx_inventory_expiry ON inventory(expiry_date);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked every time a DbPool is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    if !inventory_table_exists(conn)? {
        create_inventory_table(conn)?;
        info!("created inventory table");
        return Ok(());
    }

    if !inventory_has_unit_column(conn)? {
        migrate_add_unit_column(conn)?;
    } else {
        create_inventory_table(conn)?;
    }

    debug!("inventory schema up to date");
    Ok(())
}

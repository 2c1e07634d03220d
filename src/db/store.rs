//! SQLite-backed implementation of the inventory store port.

use crate::core::store::InventoryStore;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::InventoryItem;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::new(path)?))
    }

    pub fn pool_mut(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl InventoryStore for SqliteStore {
    fn insert(&mut self, item: &InventoryItem) -> AppResult<i64> {
        queries::insert_item(&mut self.pool, item)
    }

    fn scan_all(&mut self) -> AppResult<Vec<InventoryItem>> {
        queries::load_items(&mut self.pool)
    }

    fn delete_by_id(&mut self, id: i64) -> AppResult<usize> {
        queries::delete_item(&mut self.pool, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store() -> SqliteStore {
        SqliteStore::new(DbPool::in_memory().unwrap())
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut s = store();
        let d = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let a = s.insert(&InventoryItem::new("Milk", 1, "pcs", d)).unwrap();
        let b = s.insert(&InventoryItem::new("Rice", 500, "g", d)).unwrap();
        assert!(b > a);

        let items = s.scan_all().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, Some(a));
        assert_eq!(items[1].name, "Rice");
        assert_eq!(items[1].expiry_date, d);
    }

    #[test]
    fn delete_reports_rows_removed() {
        let mut s = store();
        let d = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let id = s.insert(&InventoryItem::new("Eggs", 6, "pcs", d)).unwrap();
        assert_eq!(s.delete_by_id(id).unwrap(), 1);
        assert_eq!(s.delete_by_id(id).unwrap(), 0);
        assert!(s.scan_all().unwrap().is_empty());
    }

    #[test]
    fn malformed_stored_date_fails_the_scan() {
        let mut s = store();
        s.pool_mut()
            .conn
            .execute(
                "INSERT INTO inventory (name, quantity, unit, expiry_date) VALUES ('Bad', 1, 'g', '01/02/2024')",
                [],
            )
            .unwrap();
        assert!(s.scan_all().is_err());
    }
}

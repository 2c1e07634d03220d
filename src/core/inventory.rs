//! Read and write paths over an [`InventoryStore`].
//!
//! Every read goes through [`Inventory::load_current`], which purges stale
//! records first, so no caller ever sees an item more than a week past its
//! expiry date.

use crate::core::purge::{is_stale, select_stale};
use crate::core::store::InventoryStore;
use crate::errors::{AppError, AppResult};
use crate::models::InventoryItem;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::{debug, warn};

/// Column used to order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Id,
    Name,
    Quantity,
    Unit,
    #[default]
    Expiry,
}

impl SortKey {
    fn compare(&self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
            SortKey::Unit => a.unit.cmp(&b.unit),
            SortKey::Expiry => a.expiry_date.cmp(&b.expiry_date),
        }
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "quantity" | "qty" => Ok(SortKey::Quantity),
            "unit" => Ok(SortKey::Unit),
            "expiry" | "expiry_date" | "date" => Ok(SortKey::Expiry),
            other => Err(AppError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Stable sort; ties keep scan order.
pub fn sort_items(items: &mut [InventoryItem], key: SortKey, reverse: bool) {
    items.sort_by(|a, b| {
        let ord = key.compare(a, b);
        if reverse { ord.reverse() } else { ord }
    });
}

pub struct Inventory<S> {
    store: S,
}

impl<S: InventoryStore> Inventory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Delete every stale record and return the ids actually removed.
    ///
    /// A failed scan is returned as an error. A failed delete is logged and
    /// skipped; the record is retried on the next purge.
    pub fn purge_stale(&mut self, today: NaiveDate) -> AppResult<Vec<i64>> {
        let items = self.store.scan_all()?;
        let mut purged = Vec::new();

        for id in select_stale(&items, today) {
            match self.store.delete_by_id(id) {
                Ok(0) => debug!(id, "stale item already gone"),
                Ok(_) => purged.push(id),
                Err(e) => warn!(id, error = %e, "failed to purge stale item"),
            }
        }

        if !purged.is_empty() {
            debug!(count = purged.len(), "purged stale items");
        }
        Ok(purged)
    }

    /// Purge, then rescan. Returns the purged ids and the remaining records
    /// in store order. Records whose delete failed stay hidden until a
    /// later purge removes them.
    pub fn purge_and_load(
        &mut self,
        today: NaiveDate,
    ) -> AppResult<(Vec<i64>, Vec<InventoryItem>)> {
        let purged = self.purge_stale(today)?;
        let items = self
            .store
            .scan_all()?
            .into_iter()
            .filter(|item| !is_stale(item, today))
            .collect();
        Ok((purged, items))
    }

    /// The authoritative current records, stale ones already purged.
    pub fn load_current(&mut self, today: NaiveDate) -> AppResult<Vec<InventoryItem>> {
        Ok(self.purge_and_load(today)?.1)
    }

    /// Current records whose name contains `query` (case-insensitive),
    /// ordered by `key`. An empty query matches everything.
    pub fn search(
        &mut self,
        query: &str,
        today: NaiveDate,
        key: SortKey,
        reverse: bool,
    ) -> AppResult<Vec<InventoryItem>> {
        let needle = query.trim().to_lowercase();
        let mut items: Vec<InventoryItem> = self
            .load_current(today)?
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect();
        sort_items(&mut items, key, reverse);
        Ok(items)
    }

    pub fn add(&mut self, item: &InventoryItem) -> AppResult<i64> {
        let id = self.store.insert(item)?;
        debug!(id, name = %item.name, "item added");
        Ok(id)
    }

    /// True when a record was removed.
    pub fn delete(&mut self, id: i64) -> AppResult<bool> {
        Ok(self.store.delete_by_id(id)? > 0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::{DbPool, SqliteStore};

    /// In-memory store that can be told to fail.
    #[derive(Default)]
    pub(crate) struct FlakyStore {
        pub items: Vec<InventoryItem>,
        pub next_id: i64,
        pub fail_scan: bool,
        pub fail_delete: Vec<i64>,
        pub deletes: Vec<i64>,
    }

    impl InventoryStore for FlakyStore {
        fn insert(&mut self, item: &InventoryItem) -> AppResult<i64> {
            self.next_id += 1;
            self.items.push(item.clone().with_id(self.next_id));
            Ok(self.next_id)
        }

        fn scan_all(&mut self) -> AppResult<Vec<InventoryItem>> {
            if self.fail_scan {
                return Err(AppError::Other("scan failed".into()));
            }
            Ok(self.items.clone())
        }

        fn delete_by_id(&mut self, id: i64) -> AppResult<usize> {
            self.deletes.push(id);
            if self.fail_delete.contains(&id) {
                return Err(AppError::Other("delete failed".into()));
            }
            let before = self.items.len();
            self.items.retain(|i| i.id != Some(id));
            Ok(before - self.items.len())
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn sqlite_inventory() -> Inventory<SqliteStore> {
        Inventory::new(SqliteStore::new(DbPool::in_memory().unwrap()))
    }

    fn add(inv: &mut Inventory<impl InventoryStore>, name: &str, qty: i64, offset: i64) -> i64 {
        let d = today() + chrono::Duration::days(offset);
        inv.add(&InventoryItem::new(name, qty, "g", d)).unwrap()
    }

    #[test]
    fn load_current_never_returns_stale_items() {
        let mut inv = sqlite_inventory();
        add(&mut inv, "Old", 1, -8);
        add(&mut inv, "Week", 1, -7);
        add(&mut inv, "Fresh", 1, 4);

        let names: Vec<String> = inv
            .load_current(today())
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Week", "Fresh"]);
    }

    #[test]
    fn search_filters_and_sorts_by_expiry() {
        let mut inv = sqlite_inventory();
        add(&mut inv, "Whole Milk", 1, 5);
        add(&mut inv, "Bread", 1, 1);
        add(&mut inv, "milk powder", 1, 2);

        let found = inv.search("MILK", today(), SortKey::Expiry, false).unwrap();
        let names: Vec<&str> = found.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["milk powder", "Whole Milk"]);

        let all = inv.search("", today(), SortKey::Quantity, true).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn search_purges_first() {
        let mut inv = sqlite_inventory();
        add(&mut inv, "Ancient cheese", 1, -30);
        assert!(inv.search("cheese", today(), SortKey::Expiry, false).unwrap().is_empty());
        assert!(inv.store_mut().scan_all().unwrap().is_empty());
    }

    #[test]
    fn failed_delete_is_left_for_next_purge() {
        let mut inv = Inventory::new(FlakyStore::default());
        let a = add(&mut inv, "A", 1, -20);
        let b = add(&mut inv, "B", 1, -20);
        inv.store_mut().fail_delete = vec![a];

        assert_eq!(inv.purge_stale(today()).unwrap(), vec![b]);
        assert_eq!(inv.store_mut().items.len(), 1);

        inv.store_mut().fail_delete.clear();
        assert_eq!(inv.purge_stale(today()).unwrap(), vec![a]);
    }

    #[test]
    fn undeleted_stale_item_is_hidden_until_purged() {
        let mut inv = Inventory::new(FlakyStore::default());
        let old = add(&mut inv, "Old", 1, -40);
        add(&mut inv, "Fresh", 1, 2);
        inv.store_mut().fail_delete = vec![old];

        let (purged, items) = inv.purge_and_load(today()).unwrap();
        assert!(purged.is_empty());
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Fresh"]);
        assert_eq!(inv.load_current(today()).unwrap().len(), 1);
        assert_eq!(inv.store_mut().items.len(), 2);

        inv.store_mut().fail_delete.clear();
        assert_eq!(inv.purge_stale(today()).unwrap(), vec![old]);
        assert_eq!(inv.store_mut().deletes, vec![old, old, old]);
    }

    #[test]
    fn name_sort_is_case_sensitive() {
        let mut items = vec![
            InventoryItem::new("apple", 1, "g", today()),
            InventoryItem::new("Banana", 1, "g", today()),
        ];
        sort_items(&mut items, SortKey::Name, false);
        assert_eq!(items[0].name, "Banana");
    }

    #[test]
    fn failed_scan_propagates() {
        let mut inv = Inventory::new(FlakyStore {
            fail_scan: true,
            ..Default::default()
        });
        assert!(inv.load_current(today()).is_err());
    }

    #[test]
    fn delete_reports_missing_ids() {
        let mut inv = sqlite_inventory();
        let id = add(&mut inv, "Eggs", 6, 3);
        assert!(inv.delete(id).unwrap());
        assert!(!inv.delete(id).unwrap());
    }

    #[test]
    fn sort_keys_parse() {
        assert_eq!("Qty".parse::<SortKey>().unwrap(), SortKey::Quantity);
        assert_eq!("expiry_date".parse::<SortKey>().unwrap(), SortKey::Expiry);
        assert!("colour".parse::<SortKey>().is_err());
    }
}

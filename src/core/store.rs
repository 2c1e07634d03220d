use crate::errors::AppResult;
use crate::models::InventoryItem;

/// Persistence port used by the engine.
///
/// Each call is treated as atomic on its own; no isolation is assumed
/// across the purge, scan and delete steps of a single tick.
pub trait InventoryStore {
    /// Persist a record and return its newly assigned id. Any id already
    /// set on `item` is ignored.
    fn insert(&mut self, item: &InventoryItem) -> AppResult<i64>;

    /// Every stored record, each carrying its id.
    fn scan_all(&mut self) -> AppResult<Vec<InventoryItem>>;

    /// Number of records removed (0 or 1).
    fn delete_by_id(&mut self, id: i64) -> AppResult<usize>;
}

impl<S: InventoryStore + ?Sized> InventoryStore for Box<S> {
    fn insert(&mut self, item: &InventoryItem) -> AppResult<i64> {
        (**self).insert(item)
    }

    fn scan_all(&mut self) -> AppResult<Vec<InventoryItem>> {
        (**self).scan_all()
    }

    fn delete_by_id(&mut self, id: i64) -> AppResult<usize> {
        (**self).delete_by_id(id)
    }
}

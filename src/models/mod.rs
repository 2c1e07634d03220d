pub mod freshness;
pub mod item;

pub use freshness::FreshnessState;
pub use item::InventoryItem;

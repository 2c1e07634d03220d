//! Expiry-lifecycle engine: classification, stale purge, reminder
//! aggregation and the periodic scheduler that ties them together.

pub mod clock;
pub mod ingredients;
pub mod inventory;
pub mod notify;
pub mod purge;
pub mod scheduler;
pub mod sink;
pub mod store;
pub mod validate;

pub use inventory::{Inventory, SortKey};
pub use scheduler::{Scheduler, SchedulerControl, TickReport};
pub use sink::{ChannelSink, ConsoleSink, FnSink, NotificationSink};
pub use store::InventoryStore;

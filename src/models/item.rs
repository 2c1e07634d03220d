use chrono::NaiveDate;
use serde::Serialize;

/// Date format used at every boundary (CLI input, SQLite rows, prompts).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A perishable item tracked in the household inventory.
///
/// `id` is `None` until the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub id: Option<i64>,
    pub name: String,
    pub quantity: i64,
    pub unit: String,
    pub expiry_date: NaiveDate,
}

impl InventoryItem {
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        unit: impl Into<String>,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity,
            unit: unit.into(),
            expiry_date,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Whole days from `today` until expiry (negative once expired).
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    /// "250g", "3pcs"
    pub fn amount(&self) -> String {
        format!("{}{}", self.quantity, self.unit)
    }

    pub fn expiry_str(&self) -> String {
        self.expiry_date.format(DATE_FORMAT).to_string()
    }
}

//! Validation of raw user input before it reaches the store.

use crate::errors::{AppError, AppResult};
use crate::models::InventoryItem;
use crate::utils::date;

/// Raw form values as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub expiry_date: String,
}

impl ItemDraft {
    pub fn validate(&self) -> AppResult<InventoryItem> {
        let name = self.name.trim();
        let quantity = self.quantity.trim();
        let unit = self.unit.trim();
        let expiry = self.expiry_date.trim();

        if name.is_empty() {
            return Err(AppError::MissingField("name"));
        }
        if quantity.is_empty() {
            return Err(AppError::MissingField("quantity"));
        }
        if unit.is_empty() {
            return Err(AppError::MissingField("unit"));
        }
        if expiry.is_empty() {
            return Err(AppError::MissingField("expiry date"));
        }

        let quantity: i64 = quantity
            .parse()
            .map_err(|_| AppError::InvalidQuantity(quantity.to_string()))?;
        let expiry_date =
            date::parse_date(expiry).ok_or_else(|| AppError::InvalidDate(expiry.to_string()))?;

        Ok(InventoryItem::new(name, quantity, unit, expiry_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, qty: &str, unit: &str, date: &str) -> ItemDraft {
        ItemDraft {
            name: name.into(),
            quantity: qty.into(),
            unit: unit.into(),
            expiry_date: date.into(),
        }
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let item = draft("  Milk ", " 2", "pcs ", "2024-05-01").validate().unwrap();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit, "pcs");
        assert_eq!(item.id, None);
    }

    #[test]
    fn negative_quantities_are_accepted() {
        assert_eq!(draft("Salt", "-5", "g", "2024-05-01").validate().unwrap().quantity, -5);
    }

    #[test]
    fn each_field_is_checked() {
        assert!(matches!(
            draft("", "1", "g", "2024-05-01").validate(),
            Err(AppError::MissingField("name"))
        ));
        assert!(matches!(
            draft("Milk", "1.5", "g", "2024-05-01").validate(),
            Err(AppError::InvalidQuantity(_))
        ));
        assert!(matches!(
            draft("Milk", "1", " ", "2024-05-01").validate(),
            Err(AppError::MissingField("unit"))
        ));
        assert!(matches!(
            draft("Milk", "1", "g", "2024-02-30").validate(),
            Err(AppError::InvalidDate(_))
        ));
        assert!(draft("Milk", "x", "g", "2024-05-01").validate().unwrap_err().is_validation());
    }
}

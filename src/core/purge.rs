use crate::models::InventoryItem;
use chrono::NaiveDate;

/// Records more than this many days past expiry are removed.
pub const STALE_AFTER_DAYS: i64 = 7;

pub fn is_stale(item: &InventoryItem, today: NaiveDate) -> bool {
    (today - item.expiry_date).num_days() > STALE_AFTER_DAYS
}

/// Ids of every record strictly more than a week past expiry, in scan order.
pub fn select_stale(items: &[InventoryItem], today: NaiveDate) -> Vec<i64> {
    items
        .iter()
        .filter(|item| is_stale(item, today))
        .filter_map(|item| item.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, expiry: &str) -> InventoryItem {
        let d = NaiveDate::parse_from_str(expiry, "%Y-%m-%d").unwrap();
        InventoryItem::new(format!("item-{id}"), 1, "pcs", d).with_id(id)
    }

    #[test]
    fn seven_days_past_is_kept_eight_is_purged() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let items = vec![item(1, "2024-01-03"), item(2, "2024-01-02"), item(3, "2024-01-01")];
        assert_eq!(select_stale(&items, today), vec![2, 3]);
    }

    #[test]
    fn future_and_recent_items_are_never_stale() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let items = vec![
            item(1, "2024-01-10"),
            item(2, "2024-02-01"),
            item(3, "2024-01-05"),
        ];
        assert!(select_stale(&items, today).is_empty());
    }

    #[test]
    fn unsaved_records_are_skipped() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let d = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let items = vec![InventoryItem::new("draft", 1, "g", d), item(9, "2023-12-01")];
        assert_eq!(select_stale(&items, today), vec![9]);
    }
}

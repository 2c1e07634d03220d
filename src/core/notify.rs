//! Aggregation of near-expiry and just-expired items into one message.
//!
//! An item is mentioned only while it is within two days of its expiry date
//! on either side. Items further in the past are already gone (see
//! [`crate::core::purge`]), items further in the future are not worth a
//! reminder yet.

use crate::models::InventoryItem;
use chrono::NaiveDate;
use std::fmt;

/// Half-width of the reminder window, in days.
pub const NOTIFY_WINDOW_DAYS: i64 = 2;

/// What a single reminder line says about one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Expires in 1 or 2 days.
    ExpiresIn(i64),
    ExpiresToday,
    /// Expired exactly one day ago.
    ExpiredAgo(i64),
    /// Two days past expiry.
    Spoiled,
}

impl Notice {
    /// Pick the line for an item `days_before` days ahead of its expiry
    /// (negative once expired). `None` outside the reminder window.
    pub fn for_days_before(days_before: i64) -> Option<Self> {
        let days_after = -days_before;
        if !(-NOTIFY_WINDOW_DAYS..=NOTIFY_WINDOW_DAYS).contains(&days_before) {
            return None;
        }

        let notice = if days_before > 0 {
            Notice::ExpiresIn(days_before)
        } else if days_before == 0 {
            Notice::ExpiresToday
        } else if days_after == 1 {
            Notice::ExpiredAgo(days_after)
        } else {
            Notice::Spoiled
        };
        Some(notice)
    }

    pub fn for_item(item: &InventoryItem, today: NaiveDate) -> Option<Self> {
        Self::for_days_before(item.days_until_expiry(today))
    }

    pub fn line(&self, item: &InventoryItem) -> String {
        format!("{} ({}) {}", item.name, item.amount(), self)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ExpiresIn(n) => write!(f, "will expire in {n} day(s)."),
            Notice::ExpiresToday => write!(f, "expires today!"),
            Notice::ExpiredAgo(n) => write!(f, "expired {n} day(s) ago."),
            Notice::Spoiled => write!(f, "has been spoiled!"),
        }
    }
}

/// One line per item inside the window, in input order, joined by newlines.
/// `None` when nothing qualifies: there is never an "all clear" message.
pub fn build_notification(items: &[InventoryItem], today: NaiveDate) -> Option<String> {
    let lines: Vec<String> = items
        .iter()
        .filter_map(|item| Notice::for_item(item, today).map(|n| n.line(item)))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn item(name: &str, offset: i64) -> InventoryItem {
        InventoryItem::new(name, 2, "pcs", today() + chrono::Duration::days(offset))
    }

    #[test]
    fn window_is_two_days_each_side() {
        assert_eq!(Notice::for_days_before(3), None);
        assert_eq!(Notice::for_days_before(2), Some(Notice::ExpiresIn(2)));
        assert_eq!(Notice::for_days_before(1), Some(Notice::ExpiresIn(1)));
        assert_eq!(Notice::for_days_before(0), Some(Notice::ExpiresToday));
        assert_eq!(Notice::for_days_before(-1), Some(Notice::ExpiredAgo(1)));
        assert_eq!(Notice::for_days_before(-2), Some(Notice::Spoiled));
        assert_eq!(Notice::for_days_before(-3), None);
    }

    #[test]
    fn lines_follow_input_order() {
        let items = vec![
            item("Yogurt", -2),
            item("Bread", 1),
            item("Cheese", 10),
            item("Milk", 0),
            item("Ham", -1),
        ];
        let msg = build_notification(&items, today()).unwrap();
        let lines: Vec<&str> = msg.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Yogurt (2pcs) has been spoiled!",
                "Bread (2pcs) will expire in 1 day(s).",
                "Milk (2pcs) expires today!",
                "Ham (2pcs) expired 1 day(s) ago.",
            ]
        );
    }

    #[test]
    fn nothing_in_window_means_no_message() {
        let items = vec![item("Rice", 30), item("Old", -5)];
        assert_eq!(build_notification(&items, today()), None);
        assert_eq!(build_notification(&[], today()), None);
    }
}

use chrono::NaiveDate;
use serde::Serialize;

/// Items expiring within this many days (inclusive) are "soon".
pub const SOON_THRESHOLD_DAYS: i64 = 3;

/// Freshness of an item relative to a given day. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FreshnessState {
    Expired,
    ExpiresToday,
    ExpiresSoon,
    Normal,
}

impl FreshnessState {
    pub fn classify(expiry_date: NaiveDate, today: NaiveDate) -> Self {
        Self::from_days_until((expiry_date - today).num_days())
    }

    pub fn from_days_until(days_until: i64) -> Self {
        match days_until {
            d if d < 0 => FreshnessState::Expired,
            0 => FreshnessState::ExpiresToday,
            1..=SOON_THRESHOLD_DAYS => FreshnessState::ExpiresSoon,
            _ => FreshnessState::Normal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FreshnessState::Expired => "expired",
            FreshnessState::ExpiresToday => "today",
            FreshnessState::ExpiresSoon => "soon",
            FreshnessState::Normal => "ok",
        }
    }
}

//! Colours used to highlight inventory rows by freshness.

use crate::models::FreshnessState;
use ansi_term::{Colour, Style};

/// Red for expired, green for today, yellow for soon, nothing otherwise.
pub fn freshness_colour(state: FreshnessState) -> Option<Colour> {
    match state {
        FreshnessState::Expired => Some(Colour::Red),
        FreshnessState::ExpiresToday => Some(Colour::Green),
        FreshnessState::ExpiresSoon => Some(Colour::Yellow),
        FreshnessState::Normal => None,
    }
}

pub fn paint_row(row: &str, state: FreshnessState, enabled: bool) -> String {
    match freshness_colour(state) {
        Some(c) if enabled => c.bold().paint(row).to_string(),
        _ => row.to_string(),
    }
}

pub fn dim(s: &str) -> String {
    Style::new().dimmed().paint(s).to_string()
}

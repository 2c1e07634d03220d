//! Table rendering for inventory listings.

use crate::models::FreshnessState;
use crate::utils::colors::paint_row;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<(Vec<String>, FreshnessState)>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>, state: FreshnessState) {
        self.rows.push((row, state));
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for (row, _) in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.width());
                }
            }
        }
        widths
    }

    fn format_line(cells: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, w) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = w.saturating_sub(cell.width());
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
            if i + 1 < widths.len() {
                line.push_str("  ");
            }
        }
        line.trim_end().to_string()
    }

    pub fn render(&self, colored: bool) -> String {
        let widths = self.widths();
        let mut out = String::new();

        out.push_str(&Self::format_line(&self.headers, &widths));
        out.push('\n');
        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for (row, state) in &self.rows {
            let line = Self::format_line(row, &widths);
            out.push_str(&paint_row(&line, *state, colored));
            out.push('\n');
        }

        out
    }
}

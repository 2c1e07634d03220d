use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Inventory, SortKey};
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::models::{FreshnessState, InventoryItem};
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::table::Table;
use chrono::NaiveDate;
use std::io::IsTerminal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        sort,
        reverse,
        no_color,
    } = cmd
    {
        let key: SortKey = sort.parse()?;
        let today = date::today();

        let mut inventory = Inventory::new(SqliteStore::open(&cfg.database)?);
        let items = inventory.search(search.as_deref().unwrap_or(""), today, key, *reverse)?;

        if items.is_empty() {
            match search {
                Some(q) => info(format!("No items matching '{}'.", q)),
                None => info("The inventory is empty."),
            }
            return Ok(());
        }

        let colored = !*no_color && std::io::stdout().is_terminal();
        print!("{}", render(&items, today, colored));
    }

    Ok(())
}

fn status(item: &InventoryItem, state: FreshnessState, today: NaiveDate) -> String {
    let days = item.days_until_expiry(today);
    match state {
        FreshnessState::Expired => format!("expired {}d ago", -days),
        FreshnessState::ExpiresToday => "expires today".to_string(),
        FreshnessState::ExpiresSoon => format!("expires in {}d", days),
        FreshnessState::Normal => "ok".to_string(),
    }
}

pub fn render(items: &[InventoryItem], today: NaiveDate, colored: bool) -> String {
    let mut table = Table::new(["ID", "Name", "Quantity", "Unit", "Expiry", "Status"]);

    for item in items {
        let state = FreshnessState::classify(item.expiry_date, today);
        table.add_row(
            vec![
                item.id.map(|id| id.to_string()).unwrap_or_default(),
                item.name.clone(),
                item.quantity.to_string(),
                item.unit.clone(),
                item.expiry_str(),
                status(item, state, today),
            ],
            state,
        );
    }

    table.render(colored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_show_status_text() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let items = vec![
            InventoryItem::new("Ham", 1, "pcs", NaiveDate::from_ymd_opt(2024, 1, 8).unwrap())
                .with_id(4),
            InventoryItem::new("Rice", 500, "g", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
                .with_id(5),
        ];
        let out = render(&items, today, false);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].starts_with("4"));
        assert!(lines[2].ends_with("expired 2d ago"));
        assert!(lines[3].ends_with("ok"));
    }
}

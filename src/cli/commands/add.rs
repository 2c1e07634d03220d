use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Inventory;
use crate::core::ingredients::IngredientCatalog;
use crate::core::validate::ItemDraft;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;
use std::path::Path;

/// Days added to today when no expiry date is given.
const DEFAULT_SHELF_DAYS: i64 = 3;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        quantity,
        unit,
        expires,
    } = cmd
    {
        //
        // 1. Resolve defaults (unit from catalog, expiry = today + 3)
        //
        let unit = match unit {
            Some(u) => u.clone(),
            None => {
                let catalog = IngredientCatalog::load(Path::new(&cfg.ingredients_file))?;
                catalog
                    .default_unit(name)
                    .unwrap_or(cfg.default_unit.as_str())
                    .to_string()
            }
        };

        let expiry = expires.clone().unwrap_or_else(|| {
            date::format_date(&date::days_from(date::today(), DEFAULT_SHELF_DAYS))
        });

        //
        // 2. Validate before touching the store
        //
        let item = ItemDraft {
            name: name.clone(),
            quantity: quantity.clone(),
            unit,
            expiry_date: expiry,
        }
        .validate()?;

        //
        // 3. Insert
        //
        let mut inventory = Inventory::new(SqliteStore::open(&cfg.database)?);
        let id = inventory.add(&item)?;

        success(format!(
            "Item added with ID: {} ({} {}, expires {})",
            id,
            item.name,
            item.amount(),
            item.expiry_str()
        ));
    }

    Ok(())
}

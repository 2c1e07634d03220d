use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Inventory;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { ids, yes } = cmd {
        let list = ids
            .iter()
            .map(|id| format!("#{id}"))
            .collect::<Vec<_>>()
            .join(", ");

        if !*yes && !ask_confirmation(&format!("Delete item(s) {}? This cannot be undone.", list))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut inventory = Inventory::new(SqliteStore::open(&cfg.database)?);

        for id in ids {
            if inventory.delete(*id)? {
                success(format!("Item with ID {} deleted.", id));
            } else {
                error(format!("No item with ID {}.", id));
            }
        }
    }

    Ok(())
}

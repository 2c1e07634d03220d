use crate::config::Config;
use crate::core::Scheduler;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

/// Run a single tick through the console sink.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut scheduler = Scheduler::new(SqliteStore::open(&cfg.database)?);
    let report = scheduler.tick();

    if !report.purged.is_empty() {
        info(format!(
            "Removed {} item(s) more than a week past expiry.",
            report.purged.len()
        ));
    }
    if !report.scanned {
        warning("Could not read the inventory, nothing was checked.");
    }

    Ok(())
}

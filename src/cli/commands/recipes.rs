use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Inventory;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::recipes::{RecipeClient, build_prompt};
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recipes { dry_run } = cmd {
        let today = date::today();
        let mut inventory = Inventory::new(SqliteStore::open(&cfg.database)?);
        let items = inventory.load_current(today)?;

        if items.is_empty() {
            info("The inventory is empty, nothing to cook with.");
            return Ok(());
        }

        let prompt = build_prompt(&items, today);

        if *dry_run {
            println!("{}", prompt);
            return Ok(());
        }

        info(format!(
            "Asking {} ({}) for recipe ideas…",
            cfg.recipe_endpoint, cfg.recipe_model
        ));

        let client = RecipeClient::new(&cfg.recipe_endpoint, &cfg.recipe_model)?;
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let answer = rt.block_on(client.generate(&prompt))?;

        success("Recipe suggestions:\n");
        println!("{}", answer);
    }

    Ok(())
}

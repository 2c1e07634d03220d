use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingredients::IngredientCatalog;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::dim;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Suggest { text } = cmd {
        let catalog = IngredientCatalog::load(Path::new(&cfg.ingredients_file))?;

        if catalog.is_empty() {
            info(format!(
                "No ingredient catalog found at {}.",
                cfg.ingredients_file
            ));
            return Ok(());
        }

        let matches = catalog.suggest(text);
        if matches.is_empty() {
            info(format!("No suggestions for '{}'.", text));
            return Ok(());
        }

        for ingredient in matches {
            println!(
                "{} {}",
                ingredient.name,
                dim(&format!("({})", ingredient.default_unit))
            );
        }
    }

    Ok(())
}

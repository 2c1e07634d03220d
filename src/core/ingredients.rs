//! Catalog of common ingredients used for name suggestions and unit defaults.
//!
//! File format:
//! `{"ingredients": [{"name": "Milk", "default_unit": "pcs"}, ...]}`

use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub default_unit: String,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    ingredients: Vec<Ingredient>,
}

#[derive(Debug, Default, Clone)]
pub struct IngredientCatalog {
    ingredients: Vec<Ingredient>,
}

impl IngredientCatalog {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self { ingredients }
    }

    /// Load the catalog; a missing file yields an empty catalog.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no ingredient catalog, suggestions disabled");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_json::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid ingredient catalog: {e}")))?;
        Ok(Self::new(file.ingredients))
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Case-insensitive substring matches, in catalog order.
    pub fn suggest(&self, text: &str) -> Vec<&Ingredient> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.ingredients
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Default unit for an exact (case-insensitive) name match.
    pub fn default_unit(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.ingredients
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(name))
            .map(|i| i.default_unit.as_str())
    }
}

//! Recipe suggestions from an external text-generation service.
//!
//! The inventory is rendered into a short plain-text summary, wrapped in a
//! prompt and posted to an Ollama-compatible `/api/generate` endpoint.

pub mod client;
pub mod prompt;

pub use client::RecipeClient;
pub use prompt::{build_prompt, format_inventory_summary};

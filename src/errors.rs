//! Unified application error type.
//! All modules (db, core, cli, recipes) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Validation (user input)
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Quantity must be an integer: {0}")]
    InvalidQuantity(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid sort column: {0}")]
    InvalidSortKey(String),

    // ---------------------------
    // Notification delivery
    // ---------------------------
    #[error("Notification delivery failed: {0}")]
    Notification(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Recipe suggestion service
    // ---------------------------
    #[error("Recipe service error: {0}")]
    Recipe(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by malformed user input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidQuantity(_)
                | AppError::MissingField(_)
                | AppError::InvalidSortKey(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

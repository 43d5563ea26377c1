//! Unified application error type.
//! Every layer (core, db, cli, utils) returns AppError so the CLI can
//! report failures in one place.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid value for '{field}': {value:?}")]
    Validation { field: &'static str, value: String },

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No {executable_type} found with id {executable_id:?}")]
    UnresolvedExecutable {
        executable_type: String,
        executable_id: String,
    },

    #[error("Farm event #{0} not found")]
    EventNotFound(i64),

    #[error("Unknown seed profile: {0}")]
    Seed(String),

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
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Shorthand used by the recombiner when a form string can't be coerced.
    pub fn validation(field: &'static str, value: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            value: value.into(),
        }
    }

    pub fn unresolved(executable_type: impl Into<String>, executable_id: impl Into<String>) -> Self {
        AppError::UnresolvedExecutable {
            executable_type: executable_type.into(),
            executable_id: executable_id.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

//! Unified application error type.
//! All modules (db, core, cli, export, reporting) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::models::event_type::ClockType;
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
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Sorry, I couldn't understand '{0}'... Use `clock in` or `clock out`")]
    InvalidClockType(String),

    // ---------------------------
    // Clock / domain errors
    // ---------------------------
    /// The derived status already equals the requested clock type.
    #[error("You are already clocked {kind}! {since}")]
    AlreadyClocked { kind: ClockType, since: String },

    #[error("Employee not found on the database: {0}")]
    EmployeeNotFound(String),

    #[error("There is already an employee with Slack id {0}")]
    EmployeeConflict(String),

    #[error("Project not found. Try again and select a project from the list.\nUsage: `track [project code]`")]
    ProjectNotFound(String),

    #[error(
        "There is a conflicting project.\nFound the following project with the same code: {name} ({code})"
    )]
    ProjectConflict { name: String, code: String },

    #[error("Sorry, you don't have permission to use this command")]
    PermissionDenied,

    #[error("{0}")]
    MissingField(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export / reporting errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Reporting error: {0}")]
    Reporting(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

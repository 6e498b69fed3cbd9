//! HTTP client used for outbound reporting calls.

use crate::errors::{AppError, AppResult};
use std::time::Duration;

pub const USER_AGENT: &str = concat!("rtimeclock/", env!("CARGO_PKG_VERSION"));

/// Reporting calls run in the background; keep them from hanging forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub fn create_blocking_client() -> AppResult<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .map_err(|e| AppError::Reporting(format!("Failed to build HTTP client: {e}")))
}

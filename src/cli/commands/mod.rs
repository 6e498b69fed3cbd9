pub mod add;
pub mod clock;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod shifts;
pub mod status;
pub mod track;

use crate::errors::{AppError, AppResult};

/// The acting user, or an error explaining how to set one.
pub(crate) fn require_actor(actor: Option<&str>) -> AppResult<&str> {
    actor.ok_or_else(|| {
        AppError::MissingField(
            "No user given: pass --as <slack-id> or set default_user in the configuration".into(),
        )
    })
}

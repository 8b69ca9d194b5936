//! Error types for Life RPG.

use thiserror::Error;

/// Engine and store errors.
///
/// `NotFound` and `Already*` variants are reported no-ops: the profile is
/// unchanged and the process continues. Only `Io`/`Json` abort an operation.
#[derive(Error, Debug)]
pub enum RpgError {
    #[error("Area '{0}' not found")]
    AreaNotFound(String),

    #[error("Project {0} not found")]
    ProjectNotFound(u64),

    #[error("Todo {0} not found")]
    TodoNotFound(u64),

    #[error("Milestone '{0}' not found")]
    MilestoneNotFound(String),

    #[error("{0} already completed")]
    AlreadyCompleted(String),

    #[error("Already logged {0} today")]
    AlreadyLoggedToday(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RpgError {
    /// True for the reported-no-op taxonomy (unknown reference or terminal
    /// state). These never abort the session; persistence errors do.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RpgError::Io(_) | RpgError::Json(_))
    }
}

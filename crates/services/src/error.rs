//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::SessionError;

/// Errors emitted by `DrillService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrillError {
    #[error("drill already completed; restart to practice again")]
    Completed,
    #[error(transparent)]
    Session(SessionError),
}

impl From<SessionError> for DrillError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Completed => Self::Completed,
            other => Self::Session(other),
        }
    }
}

//! Error types for verification sessions

use thiserror::Error;

use crate::state::UiState;

/// Errors raised when a session operation is attempted from the wrong state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("A verification request is already in flight")]
    SubmissionInFlight,

    #[error("Identity attestation has not been captured")]
    MissingAttestation,

    #[error("No verification request is in flight")]
    NotSubmitting,

    #[error("Session already finished in state {0}")]
    Finished(UiState),

    #[error("Operation not allowed in state {0}")]
    InvalidTransition(UiState),
}

impl SessionError {
    /// Pick the guard error for an operation rejected in `state`
    pub(crate) fn rejected_in(state: &UiState) -> Self {
        if state.is_terminal() {
            SessionError::Finished(state.clone())
        } else if state.is_busy() {
            SessionError::SubmissionInFlight
        } else {
            SessionError::InvalidTransition(state.clone())
        }
    }
}

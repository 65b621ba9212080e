//! Verification outcome resolution
//!
//! Maps a service answer to the next [`UiState`]. Resolution is a pure
//! function: the same result always yields the same state.
//!
//! Policy, first match wins:
//! 1. `success: true` completes the visit, whatever the code says. A stale
//!    duplicate code from an earlier attempt never downgrades a success.
//! 2. A duplicate-registration code ends the visit as already registered.
//! 3. An attestation or proof rejection is an error pointing at the step to
//!    redo.
//! 4. Anything else is surfaced as an unrecognized failure, which the user may
//!    retry. It is never treated as success or as a duplicate.

use crate::outcome::{OutcomeClass, OutcomeCode};
use crate::state::{Failure, UiState};
use crate::verification::VerificationResult;

/// Resolve a structured service result
pub fn resolve(result: &VerificationResult) -> UiState {
    if result.success {
        return UiState::Completed;
    }

    match result.code.as_deref().and_then(OutcomeCode::parse) {
        Some(code) => match code.class() {
            OutcomeClass::DuplicateRegistration => UiState::AlreadyRegistered,
            OutcomeClass::AttestationInvalid => UiState::Errored(Failure::AttestationInvalid),
            OutcomeClass::ProofInvalid => UiState::Errored(Failure::ProofInvalid),
        },
        None => UiState::Errored(Failure::Unrecognized {
            code: result.code.clone(),
        }),
    }
}

/// Resolve a failure to obtain a structured result at all
pub fn resolve_transport(message: impl Into<String>) -> UiState {
    UiState::Errored(Failure::Transport {
        message: message.into(),
    })
}

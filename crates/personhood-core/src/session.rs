//! Per-visit verification session
//!
//! A session owns the single [`UiState`] of a visit and the attestation
//! captured in step 1. All transitions go through the methods below, which
//! enforce the flow's ordering rules:
//!
//! ```text
//! NotStarted -> Step1Complete -> Submitting -> Completed
//!                                           -> AlreadyRegistered
//!                                           -> Errored -> Submitting (retry)
//! ```
//!
//! Only one request may be in flight at a time; a second submission while
//! `Submitting` is rejected.

use serde::{Deserialize, Serialize};

use crate::attestation::AttestationPayload;
use crate::error::SessionError;
use crate::proof::UniquenessProof;
use crate::resolver;
use crate::state::{Failure, UiState};
use crate::verification::{VerificationRequest, VerificationResult};

/// Unique identifier for a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn generate() -> Self {
        Self(format!("pop_{}", uuid::Uuid::new_v4().simple()))
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of one verification visit
#[derive(Debug)]
pub struct VerificationSession {
    id: SessionId,
    state: UiState,
    attestation: Option<AttestationPayload>,
}

impl Default for VerificationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::generate(),
            state: UiState::NotStarted,
            attestation: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// The attestation held for step 2, if any
    pub fn attestation(&self) -> Option<&AttestationPayload> {
        self.attestation.as_ref()
    }

    /// Whether the submit control should be disabled
    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Record the payload produced by step 1
    pub fn capture_attestation(&mut self, payload: AttestationPayload) -> Result<(), SessionError> {
        match self.state {
            UiState::NotStarted | UiState::Step1Complete | UiState::Errored(_) => {}
            _ => return Err(SessionError::rejected_in(&self.state)),
        }

        tracing::debug!(
            session = %self.id,
            fingerprint = %payload.fingerprint(),
            "Captured identity attestation"
        );

        self.attestation = Some(payload);
        self.transition(UiState::Step1Complete);
        Ok(())
    }

    /// Pair the held attestation with a proof and mark the request in flight
    pub fn begin_submission(
        &mut self,
        proof: UniquenessProof,
    ) -> Result<VerificationRequest, SessionError> {
        match self.state {
            UiState::Step1Complete | UiState::Errored(_) => {}
            UiState::NotStarted => return Err(SessionError::MissingAttestation),
            _ => return Err(SessionError::rejected_in(&self.state)),
        }

        let attestation = self
            .attestation
            .as_ref()
            .ok_or(SessionError::MissingAttestation)?;

        tracing::debug!(
            session = %self.id,
            credential_type = %proof.credential_type,
            nullifier_hash = proof.nullifier_hash().unwrap_or("-"),
            "Submitting verification request"
        );

        let request = VerificationRequest::new(attestation.clone(), proof);
        self.transition(UiState::Submitting);
        Ok(request)
    }

    /// Apply the service's structured answer to the in-flight request
    pub fn apply_result(&mut self, result: &VerificationResult) -> Result<&UiState, SessionError> {
        self.ensure_submitting()?;

        let next = resolver::resolve(result);
        match &next {
            // The payload is only needed until the visit completes
            UiState::Completed => self.attestation = None,
            // Step 1 has to be redone
            UiState::Errored(Failure::AttestationInvalid) => self.attestation = None,
            UiState::Errored(Failure::Unrecognized { code }) => {
                tracing::warn!(
                    session = %self.id,
                    code = code.as_deref().unwrap_or("<none>"),
                    "Unrecognized verification outcome"
                );
            }
            _ => {}
        }

        self.transition(next);
        Ok(&self.state)
    }

    /// Record that the in-flight request never produced a structured answer
    pub fn fail_transport(&mut self, message: impl Into<String>) -> Result<&UiState, SessionError> {
        self.ensure_submitting()?;

        let next = resolver::resolve_transport(message);
        tracing::warn!(session = %self.id, error = ?next.error_message(), "Verification transport failure");

        self.transition(next);
        Ok(&self.state)
    }

    /// Abandon the in-flight request, e.g. when the user navigates away
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.ensure_submitting()?;
        self.transition(UiState::Step1Complete);
        Ok(())
    }

    fn ensure_submitting(&self) -> Result<(), SessionError> {
        match self.state {
            UiState::Submitting => Ok(()),
            ref s if s.is_terminal() => Err(SessionError::Finished(s.clone())),
            _ => Err(SessionError::NotSubmitting),
        }
    }

    fn transition(&mut self, next: UiState) {
        tracing::debug!(session = %self.id, from = %self.state, to = %next, "Session transition");
        self.state = next;
    }
}

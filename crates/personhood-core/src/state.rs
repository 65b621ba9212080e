//! UI state for a verification visit
//!
//! The state is derived from user actions and resolved service results. It is
//! never persisted; a new visit starts again from [`UiState::NotStarted`].

use serde::{Deserialize, Serialize};

/// The two user-facing steps of the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStep {
    /// Step 1: external identity attestation
    Attestation,
    /// Step 2: uniqueness proof (phone or orb)
    UniquenessProof,
}

impl FlowStep {
    pub fn number(&self) -> u8 {
        match self {
            FlowStep::Attestation => 1,
            FlowStep::UniquenessProof => 2,
        }
    }
}

/// Why an attempt ended in an error state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure {
    /// The service rejected the identity attestation payload
    AttestationInvalid,
    /// The service rejected the uniqueness proof
    ProofInvalid,
    /// The service could not be reached or answered with a non-2xx status
    Transport { message: String },
    /// `success:false` with an absent or unknown code
    Unrecognized { code: Option<String> },
}

impl Failure {
    /// The step the user has to repeat to recover
    pub fn retry_step(&self) -> FlowStep {
        match self {
            Failure::AttestationInvalid => FlowStep::Attestation,
            _ => FlowStep::UniquenessProof,
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::AttestationInvalid => write!(
                f,
                "Server error [identity attestation invalid]. Please contact us or retry later."
            ),
            Failure::ProofInvalid => write!(
                f,
                "Server error [uniqueness proof invalid]. Please contact us or retry later."
            ),
            Failure::Transport { message } => write!(
                f,
                "Could not reach the verification service ({}). Please retry later.",
                message
            ),
            Failure::Unrecognized { code: Some(code) } => write!(
                f,
                "Verification failed [{}]. Please contact us or retry later.",
                code
            ),
            Failure::Unrecognized { code: None } => {
                write!(f, "Verification failed. Please contact us or retry later.")
            }
        }
    }
}

/// Where the visit currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UiState {
    #[default]
    NotStarted,
    Step1Complete,
    Submitting,
    AlreadyRegistered,
    Completed,
    Errored(Failure),
}

impl UiState {
    /// `Completed` and `AlreadyRegistered` end the visit
    pub fn is_terminal(&self) -> bool {
        matches!(self, UiState::Completed | UiState::AlreadyRegistered)
    }

    /// A request is in flight and the submit control is disabled
    pub fn is_busy(&self) -> bool {
        matches!(self, UiState::Submitting)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            UiState::Errored(failure) => Some(failure),
            _ => None,
        }
    }

    /// Inline error message to show under step 2, if any
    pub fn error_message(&self) -> Option<String> {
        self.failure().map(|f| f.to_string())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UiState::NotStarted => "not-started",
            UiState::Step1Complete => "step1-complete",
            UiState::Submitting => "submitting",
            UiState::AlreadyRegistered => "already-registered",
            UiState::Completed => "completed",
            UiState::Errored(_) => "errored",
        }
    }
}

impl std::fmt::Display for UiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(UiState::Completed.is_terminal());
        assert!(UiState::AlreadyRegistered.is_terminal());
        assert!(!UiState::Submitting.is_terminal());
        assert!(!UiState::Errored(Failure::ProofInvalid).is_terminal());
        assert!(!UiState::Errored(Failure::Unrecognized { code: None }).is_terminal());
    }

    #[test]
    fn test_retry_steps() {
        assert_eq!(Failure::AttestationInvalid.retry_step(), FlowStep::Attestation);
        assert_eq!(Failure::ProofInvalid.retry_step(), FlowStep::UniquenessProof);
        assert_eq!(
            Failure::Transport {
                message: "timeout".into()
            }
            .retry_step(),
            FlowStep::UniquenessProof
        );
    }

    #[test]
    fn test_error_message() {
        assert!(UiState::Completed.error_message().is_none());

        let msg = UiState::Errored(Failure::AttestationInvalid)
            .error_message()
            .unwrap();
        assert!(msg.contains("identity attestation invalid"));

        let msg = UiState::Errored(Failure::Unrecognized {
            code: Some("rate-limited".into()),
        })
        .error_message()
        .unwrap();
        assert!(msg.contains("rate-limited"));
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_value(UiState::Errored(Failure::ProofInvalid)).unwrap();
        assert_eq!(json["state"], "errored");
        assert_eq!(json["kind"], "proof_invalid");

        let json = serde_json::to_value(UiState::AlreadyRegistered).unwrap();
        assert_eq!(json["state"], "already_registered");
    }
}

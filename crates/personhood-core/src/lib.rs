//! Personhood Core
//!
//! Core domain types for proof-of-personhood verification.
//! This crate defines the payloads exchanged with the verification service,
//! the outcome resolver and the per-visit session state machine. It does no
//! I/O of its own.

pub mod attestation;
pub mod error;
pub mod outcome;
pub mod proof;
pub mod resolver;
pub mod session;
pub mod state;
pub mod verification;

pub use attestation::AttestationPayload;
pub use error::SessionError;
pub use outcome::{OutcomeClass, OutcomeCode};
pub use proof::{CredentialType, UniquenessProof};
pub use resolver::{resolve, resolve_transport};
pub use session::{SessionId, VerificationSession};
pub use state::{Failure, FlowStep, UiState};
pub use verification::{VerificationRequest, VerificationResult};

//! Request and response bodies of the verification endpoint

use serde::{Deserialize, Serialize};

use crate::attestation::AttestationPayload;
use crate::outcome::OutcomeCode;
use crate::proof::UniquenessProof;

/// Body of `POST {api}/verify`
///
/// Only constructible from both halves, so step 2 can never be sent before
/// step 1 has produced an attestation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationRequest {
    #[serde(rename = "result")]
    proof: UniquenessProof,

    #[serde(rename = "response")]
    attestation: AttestationPayload,
}

impl VerificationRequest {
    pub fn new(attestation: AttestationPayload, proof: UniquenessProof) -> Self {
        Self { proof, attestation }
    }

    pub fn attestation(&self) -> &AttestationPayload {
        &self.attestation
    }

    pub fn proof(&self) -> &UniquenessProof {
        &self.proof
    }
}

/// Structured answer from the verification service
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerificationResult {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl VerificationResult {
    pub fn success() -> Self {
        Self {
            success: true,
            code: None,
        }
    }

    pub fn failure(code: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code.into()),
        }
    }

    /// The code, if it is one of the known ones
    pub fn outcome_code(&self) -> Option<OutcomeCode> {
        self.code.as_deref().and_then(OutcomeCode::parse)
    }
}

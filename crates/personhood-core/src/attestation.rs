//! Identity attestation payloads
//!
//! The attestation is produced by an external sign-in flow (step 1). Its
//! contents are opaque to the client: it is captured, held in memory and
//! forwarded to the verification service unchanged.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

/// Opaque attestation data from the identity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttestationPayload(serde_json::Value);

impl AttestationPayload {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// SHA3-256 of the compact JSON encoding, hex encoded.
    ///
    /// Used in logs instead of the payload itself.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha3_256::new();
        hasher.update(self.0.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl From<serde_json::Value> for AttestationPayload {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

//! Uniqueness proofs
//!
//! A uniqueness proof is produced by the proof widget in step 2. Only the
//! credential type is interpreted locally; every other field is carried
//! through to the verification service as-is.

use serde::{Deserialize, Serialize};

/// Credential a uniqueness proof was generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    /// Biometric orb verification
    Orb,
    /// Phone number verification
    Phone,
}

impl CredentialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialType::Orb => "orb",
            CredentialType::Phone => "phone",
        }
    }
}

impl std::fmt::Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signed uniqueness proof returned by the proof widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniquenessProof {
    /// Which credential backs the proof
    pub credential_type: CredentialType,

    /// Remaining proof fields (merkle root, nullifier hash, proof bytes, ...)
    #[serde(flatten)]
    fields: serde_json::Map<String, serde_json::Value>,
}

impl UniquenessProof {
    pub fn new(
        credential_type: CredentialType,
        fields: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            credential_type,
            fields,
        }
    }

    /// Look up an opaque field
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }

    /// Nullifier hash, if the widget supplied one
    pub fn nullifier_hash(&self) -> Option<&str> {
        self.field("nullifier_hash").and_then(|v| v.as_str())
    }
}

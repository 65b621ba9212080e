//! Step 1 and step 2 collaborators
//!
//! The identity attestation sign-in and the uniqueness proof widget run
//! outside this crate. They are modelled as async traits that resolve once
//! the user finishes the external flow.

use async_trait::async_trait;
use personhood_core::{AttestationPayload, CredentialType, UniquenessProof};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("User closed the {0} flow")]
    Dismissed(&'static str),

    #[error("Credential type {0} was not requested")]
    UnacceptedCredential(CredentialType),

    #[error("Provider failed: {0}")]
    Failed(String),
}

/// Parameters the uniqueness proof widget is opened with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Application id registered with the proof provider
    pub app_id: String,

    /// Action identifier the proof is scoped to
    pub action: String,

    /// Signal bound into the proof
    pub signal: String,

    /// Credential types the user may prove with
    pub credential_types: Vec<CredentialType>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            app_id: "app_staging_9aa79aedb09dc9224e0b85c36133278b".to_string(),
            action: "proof-of-personhood".to_string(),
            signal: "main".to_string(),
            credential_types: vec![CredentialType::Phone, CredentialType::Orb],
        }
    }
}

impl WidgetConfig {
    /// Check that a proof uses one of the declared credential types
    pub fn accepts(&self, proof: &UniquenessProof) -> Result<(), ProviderError> {
        if self.credential_types.contains(&proof.credential_type) {
            Ok(())
        } else {
            Err(ProviderError::UnacceptedCredential(proof.credential_type))
        }
    }
}

/// Produces the attestation for step 1
#[async_trait]
pub trait IdentityAttestationProvider: Send + Sync {
    async fn attest(&self) -> Result<AttestationPayload, ProviderError>;
}

/// Produces the uniqueness proof for step 2
#[async_trait]
pub trait UniquenessProofProvider: Send + Sync {
    async fn prove(&self, widget: &WidgetConfig) -> Result<UniquenessProof, ProviderError>;
}

/// Hands back an attestation obtained elsewhere (e.g. read from a file)
pub struct StaticAttestationProvider {
    payload: AttestationPayload,
}

impl StaticAttestationProvider {
    pub fn new(payload: AttestationPayload) -> Self {
        Self { payload }
    }
}

#[async_trait]
impl IdentityAttestationProvider for StaticAttestationProvider {
    async fn attest(&self) -> Result<AttestationPayload, ProviderError> {
        Ok(self.payload.clone())
    }
}

/// Hands back a proof obtained elsewhere
pub struct StaticProofProvider {
    proof: UniquenessProof,
}

impl StaticProofProvider {
    pub fn new(proof: UniquenessProof) -> Self {
        Self { proof }
    }
}

#[async_trait]
impl UniquenessProofProvider for StaticProofProvider {
    async fn prove(&self, _widget: &WidgetConfig) -> Result<UniquenessProof, ProviderError> {
        Ok(self.proof.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_widget() {
        let widget = WidgetConfig::default();
        assert_eq!(widget.action, "proof-of-personhood");
        assert_eq!(widget.signal, "main");
        assert_eq!(
            widget.credential_types,
            vec![CredentialType::Phone, CredentialType::Orb]
        );
    }

    #[test]
    fn test_accepts() {
        let widget = WidgetConfig {
            credential_types: vec![CredentialType::Orb],
            ..Default::default()
        };
        let orb = UniquenessProof::new(CredentialType::Orb, Default::default());
        let phone = UniquenessProof::new(CredentialType::Phone, Default::default());

        assert!(widget.accepts(&orb).is_ok());
        assert_eq!(
            widget.accepts(&phone),
            Err(ProviderError::UnacceptedCredential(CredentialType::Phone))
        );
    }

    #[tokio::test]
    async fn test_static_providers() {
        let payload = AttestationPayload::new(serde_json::json!({ "vaultId": "0x01" }));
        let provider = StaticAttestationProvider::new(payload.clone());
        assert_eq!(provider.attest().await.unwrap(), payload);

        let proof = UniquenessProof::new(CredentialType::Phone, Default::default());
        let provider = StaticProofProvider::new(proof.clone());
        assert_eq!(
            provider.prove(&WidgetConfig::default()).await.unwrap(),
            proof
        );
    }
}

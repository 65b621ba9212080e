//! Two-step verification flow
//!
//! Wires the step 1 and step 2 providers and the verification service to a
//! [`VerificationSession`]. Every service failure ends in a user-visible
//! state: structured answers go through the resolver, transport failures
//! become `Errored(Transport)`. Nothing is retried automatically.

use std::future::Future;

use personhood_core::{SessionError, UiState, VerificationSession};
use thiserror::Error;

use crate::client::VerificationService;
use crate::providers::{
    IdentityAttestationProvider, ProviderError, UniquenessProofProvider, WidgetConfig,
};

#[derive(Error, Debug)]
pub enum FlowError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Drives one visit through both steps
pub struct VerificationFlow<A, U, S> {
    session: VerificationSession,
    widget: WidgetConfig,
    attestation_provider: A,
    proof_provider: U,
    service: S,
}

impl<A, U, S> VerificationFlow<A, U, S>
where
    A: IdentityAttestationProvider,
    U: UniquenessProofProvider,
    S: VerificationService,
{
    pub fn new(widget: WidgetConfig, attestation_provider: A, proof_provider: U, service: S) -> Self {
        Self {
            session: VerificationSession::new(),
            widget,
            attestation_provider,
            proof_provider,
            service,
        }
    }

    pub fn session(&self) -> &VerificationSession {
        &self.session
    }

    pub fn state(&self) -> &UiState {
        self.session.state()
    }

    /// Step 1: run the identity attestation sign-in
    pub async fn complete_attestation(&mut self) -> Result<&UiState, FlowError> {
        self.ensure_idle()?;

        let payload = self.attestation_provider.attest().await?;
        self.session.capture_attestation(payload)?;
        Ok(self.session.state())
    }

    /// Step 2: obtain a uniqueness proof and submit it with the attestation
    pub async fn prove_and_submit(&mut self) -> Result<&UiState, FlowError> {
        self.submit_cancellable(std::future::pending()).await
    }

    /// Step 2, abandoning the in-flight request if `cancel` resolves first.
    ///
    /// On cancellation the session returns to `Step1Complete`.
    pub async fn submit_cancellable<C>(&mut self, cancel: C) -> Result<&UiState, FlowError>
    where
        C: Future<Output = ()>,
    {
        self.ensure_idle()?;
        if self.session.attestation().is_none() {
            return Err(SessionError::MissingAttestation.into());
        }

        let proof = self.proof_provider.prove(&self.widget).await?;
        self.widget.accepts(&proof)?;

        let request = self.session.begin_submission(proof)?;

        tokio::select! {
            outcome = self.service.verify(&request) => match outcome {
                Ok(result) => {
                    self.session.apply_result(&result)?;
                }
                Err(err) => {
                    self.session.fail_transport(err.to_string())?;
                }
            },
            _ = cancel => {
                tracing::info!(session = %self.session.id(), "Verification cancelled");
                self.session.cancel()?;
            }
        }

        tracing::info!(
            session = %self.session.id(),
            state = %self.session.state(),
            "Verification attempt finished"
        );
        Ok(self.session.state())
    }

    /// Reject a step before calling out to a provider
    fn ensure_idle(&self) -> Result<(), SessionError> {
        match self.session.state() {
            UiState::Submitting => Err(SessionError::SubmissionInFlight),
            state if state.is_terminal() => Err(SessionError::Finished(state.clone())),
            _ => Ok(()),
        }
    }
}

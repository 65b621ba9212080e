//! Example: driving a verification visit
//!
//! Runs both steps against a verification service with canned payloads and
//! prints the resulting state.
//!
//! Run with: PERSONHOOD_API_URL=http://localhost:3000 cargo run --example verify_session

use personhood_client_sdk::{
    ClientConfig, HttpVerificationService, StaticAttestationProvider, StaticProofProvider,
    VerificationFlow,
};
use personhood_core::{AttestationPayload, UiState, UniquenessProof};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::load(None, None)?;
    println!("Verification endpoint: {}", config.verify_url()?);

    let attestation = AttestationPayload::new(serde_json::json!({
        "appId": "0x8a4f",
        "signedMessage": "main",
        "proofs": []
    }));
    let proof: UniquenessProof = serde_json::from_value(serde_json::json!({
        "credential_type": "phone",
        "merkle_root": "0x0aa1",
        "nullifier_hash": "0x77c3",
        "proof": "0x11d0"
    }))?;

    let mut flow = VerificationFlow::new(
        config.widget.clone(),
        StaticAttestationProvider::new(attestation),
        StaticProofProvider::new(proof),
        HttpVerificationService::new(&config)?,
    );

    println!("1. Identity attestation...");
    flow.complete_attestation().await?;
    println!("   ✓ {}", flow.state());

    println!("2. Uniqueness proof...");
    match flow.prove_and_submit().await? {
        UiState::Completed => println!("   ✓ Verified. Welcome!"),
        UiState::AlreadyRegistered => println!("   ✓ You already registered."),
        state => println!(
            "   ✗ {}",
            state.error_message().unwrap_or_else(|| state.to_string())
        ),
    }

    Ok(())
}

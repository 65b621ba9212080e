//! Verify command - run both steps against the verification service

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use personhood_client_sdk::{
    ClientConfig, HttpVerificationService, StaticAttestationProvider, StaticProofProvider,
    VerificationFlow,
};
use personhood_core::{AttestationPayload, UiState, UniquenessProof};

/// Exit status for an interrupted run, as a shell reports SIGINT
const EXIT_CANCELLED: i32 = 130;

/// How a verify run ended
#[derive(Debug)]
pub struct Outcome {
    pub state: UiState,
    pub cancelled: bool,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        exit_code(&self.state, self.cancelled)
    }
}

fn exit_code(state: &UiState, cancelled: bool) -> i32 {
    if cancelled {
        EXIT_CANCELLED
    } else if state.failure().is_some() {
        1
    } else {
        0
    }
}

pub async fn run(
    config: &ClientConfig,
    attestation_file: &Path,
    proof_file: &Path,
    json: bool,
) -> Result<Outcome> {
    let attestation: AttestationPayload = read_json(attestation_file)?;
    let proof: UniquenessProof = read_json(proof_file)?;

    if !json {
        println!("\n{}", style("Proof of Personhood").bold().underlined());
        println!();
        println!("  Endpoint:      {}", style(config.verify_url()?).cyan());
        println!("  Attestation:   {}", style(attestation.fingerprint()).dim());
        println!("  Credential:    {}", style(proof.credential_type).cyan());
        println!();
    }

    let mut flow = VerificationFlow::new(
        config.widget.clone(),
        StaticAttestationProvider::new(attestation),
        StaticProofProvider::new(proof),
        HttpVerificationService::new(config)?,
    );

    flow.complete_attestation().await?;
    if !json {
        println!("  {} Step 1 complete", style("✓").green());
    }

    let spinner = ProgressBar::new_spinner();
    if json {
        spinner.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }
    spinner.set_style(ProgressStyle::default_spinner().template("  {spinner:.green} {msg}")?);
    spinner.set_message("Verifying...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut cancelled = false;
    let state = flow
        .submit_cancellable(async {
            // Ctrl-C abandons the in-flight request
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
            cancelled = true;
        })
        .await?
        .clone();

    spinner.finish_and_clear();

    if cancelled {
        tracing::info!("Verification cancelled by user");
        if json {
            println!("{}", serde_json::json!({ "state": "cancelled" }));
        } else {
            println!("{}", style("✗ Verification cancelled").yellow().bold());
        }
    } else if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        super::print_state(&state);
    }

    Ok(Outcome { state, cancelled })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use personhood_core::Failure;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&UiState::Completed, false), 0);
        assert_eq!(exit_code(&UiState::AlreadyRegistered, false), 0);
        assert_eq!(exit_code(&UiState::Errored(Failure::ProofInvalid), false), 1);
        assert_eq!(
            exit_code(
                &UiState::Errored(Failure::Transport {
                    message: "timeout".to_string()
                }),
                false
            ),
            1
        );
    }

    #[test]
    fn test_cancelled_run_is_not_success() {
        let outcome = Outcome {
            state: UiState::Step1Complete,
            cancelled: true,
        };
        assert_eq!(outcome.exit_code(), EXIT_CANCELLED);
        assert_ne!(outcome.exit_code(), 0);
    }
}

//! CLI command implementations

pub mod codes;
pub mod resolve;
pub mod status;
pub mod verify;

use console::style;
use personhood_core::UiState;

/// Print a state the way the verification screen would present it
pub(crate) fn print_state(state: &UiState) {
    match state {
        UiState::Completed => {
            println!("{}", style("✓ Congratulations, you are verified!").green().bold())
        }
        UiState::AlreadyRegistered => {
            println!("{}", style("✓ You already registered.").cyan().bold())
        }
        UiState::Errored(failure) => {
            println!("{}", style(format!("✗ {}", failure)).red().bold());
            println!(
                "  Retry step {}",
                style(failure.retry_step().number()).yellow()
            );
        }
        other => println!("  State:         {}", style(other).yellow()),
    }
}

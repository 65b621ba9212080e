//! Resolve command - map a raw service result to a UI state

use anyhow::Result;
use console::style;
use personhood_core::{resolve, VerificationResult};

pub fn run(success: bool, code: Option<String>, json: bool) -> Result<()> {
    let result = VerificationResult { success, code };
    let state = resolve(&result);

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!("\n{}", style("Resolve Verification Result").bold().underlined());
    println!();
    println!("  Success:       {}", result.success);
    println!(
        "  Code:          {}",
        result.code.as_deref().unwrap_or("<none>")
    );
    match result.outcome_code() {
        Some(code) => println!("  Class:         {:?}", code.class()),
        None if result.code.is_some() => {
            println!("  Class:         {}", style("unrecognized").yellow())
        }
        None => {}
    }
    println!();
    super::print_state(&state);

    Ok(())
}

//! Codes command - list known outcome codes

use console::style;
use personhood_core::{OutcomeClass, OutcomeCode};

pub fn list() {
    println!("\n{}", style("Outcome Codes").bold().underlined());
    println!();

    for code in OutcomeCode::all() {
        let class = match code.class() {
            OutcomeClass::DuplicateRegistration => style("already registered").cyan(),
            OutcomeClass::AttestationInvalid => style("error, retry step 1").red(),
            OutcomeClass::ProofInvalid => style("error, retry step 2").red(),
        };
        println!("  {:<34} {}", code.as_str(), class);
    }

    println!();
    println!("  Any other code, or none, with success=false is reported as an error.");
    println!("  success=true always completes, whatever the code.");
}

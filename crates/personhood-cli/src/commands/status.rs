//! Status command - show configuration and status

use std::path::Path;

use console::style;
use personhood_client_sdk::ClientConfig;

pub fn show(config: &ClientConfig, config_file: Option<&Path>) {
    println!(
        "\n{}",
        style("╔════════════════════════════════════════╗").cyan()
    );
    println!(
        "{}",
        style("║   Proof of Personhood Status           ║").cyan()
    );
    println!(
        "{}",
        style("╚════════════════════════════════════════╝").cyan()
    );
    println!();

    // Version info
    println!("{}", style("Version").bold().underlined());
    println!("  personhood-cli:  {}", env!("CARGO_PKG_VERSION"));
    println!();

    // Configuration
    println!("{}", style("Configuration").bold().underlined());
    println!(
        "  Config file:     {}",
        config_file
            .map(|p| style(p.display().to_string()).green())
            .unwrap_or_else(|| style("Not set (defaults + environment)".to_string()).yellow())
    );
    match config.verify_url() {
        Ok(url) => println!("  Endpoint:        {}", style(url).green()),
        Err(e) => println!("  Endpoint:        {}", style(e).red()),
    }
    println!("  Timeout:         {}s", config.timeout_seconds);
    println!();

    // Proof widget
    println!("{}", style("Proof Widget").bold().underlined());
    println!("  App id:          {}", config.widget.app_id);
    println!("  Action:          {}", config.widget.action);
    println!("  Signal:          {}", config.widget.signal);
    println!(
        "  Credentials:     {}",
        config
            .widget
            .credential_types
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    // Quick help
    println!("{}", style("Quick Start").bold().underlined());
    println!("  Verify:          personhood verify -a attestation.json -p proof.json");
    println!("  Resolve offline: personhood resolve --code orb-already-verified");
    println!("  Show help:       personhood --help");
}

//! SwitchHosts release orchestrator.
//!
//! Resolves the release profile (`MAKE_FOR`), stages the build tree and
//! packages every target through electron-builder.

use std::process;

use switchhosts_make::cli;

#[tokio::main]
async fn main() {
    // MAKE_FOR / IDENTITY may come from a .env file; real env vars win
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => {
            eprintln!("Warning: ignoring unreadable .env file: {}", e);
        }
        _ => {}
    }

    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            let output = cli::OutputManager::new(false, false);
            let _ = output.error(&e.to_string());
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}

//! Contact Book - Main entry point
//!
//! Starts the interactive assistant on stdin/stdout.

use anyhow::Result;
use contact_book::{assistant, Assistant, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr; stdout carries the conversation
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact book with a {} day birthday window",
        config.birthday_window_days
    );

    let mut assistant = Assistant::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = assistant::run(&mut assistant, stdin.lock(), stdout.lock()) {
        error!("Assistant stopped with an error: {}", e);
        return Err(e);
    }

    info!(
        "Contact book shutdown complete ({} contacts discarded)",
        assistant.directory().len()
    );
    Ok(())
}

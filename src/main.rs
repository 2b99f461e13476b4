//! feedchain - command-line demonstration of the dispatch chain.
//!
//! Usage: `feedchain [config.toml]`. Transcripts go to stdout, logs to
//! stderr.

use feedchain::config::{Config, duplicate_triggers, validate};
use feedchain::{Chain, Client, Registry};
use std::io::Write;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).map_err(|e| {
            error!(path = %path, error = %e, "Failed to load config");
            e
        })?,
        None => Config::default(),
    };

    let registry = Registry::new();
    if let Err(errors) = validate(&config, &registry) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        return Err(anyhow::anyhow!(
            "configuration has {} error(s)",
            errors.len()
        ));
    }

    for dup in duplicate_triggers(&config, &registry) {
        warn!(
            trigger = %dup.trigger,
            handlers = ?dup.handlers,
            "Trigger claimed by several handlers; only the first will answer"
        );
    }

    let chain = Chain::from_config(&config.chain, &registry)?;
    info!(chain = %chain.describe(), handlers = chain.len(), "Chain built");

    let requests = &config.demo.requests;
    let mut out = std::io::stdout().lock();

    let client = Client::new(Arc::clone(chain.head()));
    write!(out, "{}", client.run("Chain", requests))?;

    if let Some(entry) = config.demo.subchain_entry() {
        let client = Client::new(Arc::clone(chain.subchain(entry)?));
        writeln!(out)?;
        write!(out, "{}", client.run("Subchain", requests))?;
    }

    out.flush()?;
    Ok(())
}

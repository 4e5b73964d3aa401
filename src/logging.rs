//! Tracing setup
//!
//! The TUI owns stdout and stderr while it runs, so logs only go to a file. With no
//! file configured no subscriber is installed and every `tracing` call is a no-op.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber. Filter comes from `RUST_LOG`, default `info`.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(path = %path.display(), version = crate::cli::VERSION, "logging started");
    Ok(())
}

//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::domain::error::Result;
use crate::infrastructure::paths::expand_tilde;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events by `RUST_LOG`, falling back to `config.log_level`
/// 2. Writes human-readable lines to stderr
/// 3. Optionally writes the same lines, without colors, to a rotating log
///    file at `config.log_file`
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// # Errors
///
/// Returns an I/O error if the log file's directory cannot be created.
///
/// # Example
///
/// ```rust
/// use samlookup::observability::init_tracing;
/// use samlookup::Config;
///
/// let config = Config {
///     log_level: "debug".to_string(),
///     ..Default::default()
/// };
/// init_tracing(&config)?;
/// tracing::debug!("tracing is now active");
/// # Ok::<(), samlookup::SamLookupError>(())
/// ```
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file_writer = match &config.log_file {
        Some(path) => {
            let path = expand_tilde(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Some(Arc::new(FileWriter::new(path)))
        }
        None => None,
    };
    let file_layer = file_writer
        .clone()
        .map(|writer| fmt::layer().with_ansi(false).with_writer(writer));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if let (true, Some(writer)) = (installed, &file_writer) {
        tracing::debug!(path = %writer.path().display(), "logging to file");
    }

    Ok(())
}

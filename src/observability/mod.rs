//! Logging setup.
//!
//! All modules log through `tracing` macros. [`init_tracing`] installs a
//! `tracing-subscriber` registry with an `EnvFilter`, a stderr fmt layer and
//! an optional file layer backed by [`FileWriter`].
//!
//! # Configuration
//!
//! The level is resolved in order:
//! 1. `RUST_LOG` environment variable
//! 2. `log_level` from the config file or `--log-level`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`file_writer`]: rotating file writer (10 MB, 15 backups)

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;

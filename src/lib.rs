//! samlookup: entity search and 889 compliance lookup.
//!
//! samlookup queries an entity search endpoint and turns each registered
//! entity into a list entry that is either selectable (compliant, with a link
//! to its summary PDF) or disabled (non-compliant or excluded). It provides:
//! - Query sanitization before transmission
//! - Classification of every response into an explicit outcome
//! - Pure rendering of records into list entries with status badges
//! - "Show more" pagination that appends subsequent pages
//! - HTML fragment and plain-text output
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI driver (main.rs)                               │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime.rs)                               │  ← Event loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, stale-response filtering         │
//! │  - Pagination control                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐          ┌───────────────────────┐
//! │ UI Layer (ui/)        │          │ Client Layer (client/)│
//! │ - Record → entry      │          │ - Request URLs        │
//! │ - HTML / text output  │          │ - Outcome classifier  │
//! └───────────────────────┘          │ - reqwest backend     │
//!                                    └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! │  - Entity model, query, errors (domain/)            │
//! │  - Config paths (infrastructure/)                   │
//! │  - tracing setup, rotating log file (observability/)│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: View context and event/action state machine
//! - [`client`]: Search requests, outcomes and the HTTP backend
//! - [`domain`]: Entity records, query sanitization, errors
//! - [`infrastructure`]: Config and log file locations
//! - [`observability`]: `tracing` subscriber setup
//! - [`runtime`]: Event loop executing fetches
//! - [`ui`]: Rendering
//!
//! # Configuration
//!
//! Read from `samlookup/config.toml` in the platform config directory
//! (`~/.config` on Linux, or `$SAMLOOKUP_CONFIG_DIR`) when present, or from the file
//! given with `--config`. Every key is optional:
//!
//! ```toml
//! base_url = "http://localhost:5000"
//! format = "html"
//! log_level = "info"
//! log_file = "~/.local/state/samlookup/samlookup.log"
//! request_timeout_secs = 30
//! ```
//!
//! # Example
//!
//! ```rust
//! use samlookup::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::SubmitSearch { query: "acme".into() })?;
//! let [Action::Fetch(request)] = actions.as_slice() else { unreachable!() };
//! assert_eq!(request.page, None);
//! # Ok::<(), samlookup::SamLookupError>(())
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use client::{HttpBackend, SearchBackend, SearchOutcome, SearchRequest};
pub use domain::{EntityRecord, Page, Result, SamLookupError, SearchQuery};
pub use runtime::{PageLimit, Runtime};
pub use ui::{render, OutputFormat};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default backend origin.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Runtime configuration.
///
/// Loaded from a TOML file (see the crate docs), then overridden by command
/// line flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Origin of the search service. Default: `http://localhost:5000`
    pub base_url: String,

    /// Output flavor. Default: `html`
    pub format: OutputFormat,

    /// `EnvFilter` directive used when `RUST_LOG` is unset. Default: `"info"`
    pub log_level: String,

    /// Rotating log file; stderr only when `None`.
    pub log_file: Option<PathBuf>,

    /// Per-request timeout. Requests are unbounded when `None` or zero.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            format: OutputFormat::Html,
            log_level: "info".to_string(),
            log_file: None,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Reads a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`SamLookupError::Io`] if the file cannot be read and
    /// [`SamLookupError::Config`] if it is not valid TOML for this struct.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| SamLookupError::Config(format!("{}: {e}", path.display())))
    }

    /// Loads `explicit` if given, else the default config file if it exists,
    /// else the defaults.
    ///
    /// # Errors
    ///
    /// Fails if the chosen file cannot be read or parsed. A missing default
    /// file is not an error; a missing explicit one is.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(&infrastructure::expand_tilde(path));
        }
        match infrastructure::default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// The request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// Creates an idle view context dated today (local time).
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let today = chrono::Local::now().date_naive();
    tracing::debug!(base_url = %config.base_url, today = %today, "initializing view context");
    AppState::new(today)
}

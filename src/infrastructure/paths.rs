//! Filesystem locations used by samlookup.
//!
//! Platform locations come from the `dirs` crate. `SAMLOOKUP_CONFIG_DIR`
//! overrides the config directory.

use std::env;
use std::path::{Path, PathBuf};

/// Name of the per-user config directory and of the config file within it.
const APP_DIR: &str = "samlookup";
const CONFIG_FILE: &str = "config.toml";

const CONFIG_DIR_ENV: &str = "SAMLOOKUP_CONFIG_DIR";

/// Reads a directory override; an empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the samlookup config directory.
///
/// `$SAMLOOKUP_CONFIG_DIR` when set, otherwise `samlookup` under the platform
/// config directory (`~/.config` on Linux, `~/Library/Application Support`
/// on macOS). `None` when neither can be determined.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dir_from_env(CONFIG_DIR_ENV).or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR)))
}

/// Returns the default config file path, `config.toml` in [`config_dir`].
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Expands a leading `~` to the home directory.
///
/// # Examples
///
/// ```
/// use samlookup::infrastructure::expand_tilde;
/// use std::path::Path;
///
/// assert_eq!(expand_tilde(Path::new("/var/log/x.log")), Path::new("/var/log/x.log"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`GOBARBER_DATA_DIR`, `GOBARBER_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with `GoBarber` appended
//!
//! The config directory holds `settings.toml`; the data directory holds the
//! persisted session (`storage.cbor`).

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "GoBarber";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "GOBARBER_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GOBARBER_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` and `--config-dir` CLI arguments.
///
/// Call once at startup, before any path is resolved. Later calls are ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI path overrides already initialized; ignoring");
    }
}

/// Which application directory to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirKind {
    Data,
    Config,
}

impl DirKind {
    fn cli_override(self) -> Option<PathBuf> {
        let cell = match self {
            DirKind::Data => &CLI_DATA_DIR,
            DirKind::Config => &CLI_CONFIG_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn env_var(self) -> &'static str {
        match self {
            DirKind::Data => ENV_DATA_DIR,
            DirKind::Config => ENV_CONFIG_DIR,
        }
    }

    fn platform_base(self) -> Option<PathBuf> {
        match self {
            DirKind::Data => dirs::data_dir(),
            DirKind::Config => dirs::config_dir(),
        }
    }
}

fn resolve(kind: DirKind, override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = kind.cli_override() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(kind.env_var()) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    kind.platform_base().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application data directory (persisted session).
///
/// Returns `None` if the platform data directory cannot be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory, preferring `override_path`.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Data, override_path)
}

/// Returns the application config directory (`settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory, preferring `override_path`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Config, override_path)
}

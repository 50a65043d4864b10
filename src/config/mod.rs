// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run configuration resolved from the environment.
//!
//! # Environment Variable Mapping
//!
//! ```text
//! VCC_VSCODE_SETTINGS=path  → settings_path (default .vscode/settings.json)
//! VCC_DRY_RUN=1             → dry_run      ("0"/"false" = off, unset = off)
//! VCC_LOG_LEVEL=4           → log_level    (0-6, default 2)
//! VCC_LOG_FILE=vcc.log      → log_file
//! ```
//!
//! Variables are read once, at startup, into a [`RunConfig`] that is passed
//! down explicitly.

pub mod loader;


use std::path::{Path, PathBuf};

use bon::Builder;

use crate::error::ConfigError;
use crate::logging::LogLevel;

use loader::EnvLoader;

/// Prefix shared by all environment variables.
pub const ENV_PREFIX: &str = "VCC";

/// Settings file used when `VCC_VSCODE_SETTINGS` is unset or empty.
pub const DEFAULT_SETTINGS_PATH: &str = ".vscode/settings.json";

pub const SETTINGS_PATH_VAR: &str = "VCC_VSCODE_SETTINGS";
pub const DRY_RUN_VAR: &str = "VCC_DRY_RUN";
pub const LOG_LEVEL_VAR: &str = "VCC_LOG_LEVEL";
pub const LOG_FILE_VAR: &str = "VCC_LOG_FILE";

/// Every variable read, spelled exactly.
pub const ENV_VARS: [&str; 4] = [SETTINGS_PATH_VAR, DRY_RUN_VAR, LOG_LEVEL_VAR, LOG_FILE_VAR];

/// Resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct RunConfig {
    #[builder(into, default = PathBuf::from(DEFAULT_SETTINGS_PATH))]
    settings_path: PathBuf,
    #[builder(default = false)]
    dry_run: bool,
    #[builder(default)]
    log_level: LogLevel,
    #[builder(into)]
    log_file: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RunConfig {
    /// Resolves the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the environment cannot be collected or a
    /// variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        EnvLoader::new().build()
    }

    /// Resolves the configuration from an explicit set of variables.
    ///
    /// # Errors
    ///
    /// Same as [`RunConfig::from_env`].
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EnvLoader::new().with_vars(vars).build()
    }

    /// Path of the VS Code settings document.
    #[must_use]
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Whether to print the command without running it.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Console log verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Optional log file.
    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// Interprets an environment flag.
///
/// Unset is false. `"0"` and `"false"` in any letter case are false. Every
/// other value, the empty string included, is true.
#[must_use]
pub fn env_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
}

/// Returns `value` unless it is unset or empty.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parses a log level value; unset or empty selects the default.
fn parse_log_level(value: Option<&str>) -> Result<LogLevel, ConfigError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(LogLevel::default());
    };
    raw.parse::<u8>()
        .ok()
        .and_then(LogLevel::from_u8)
        .ok_or_else(|| ConfigError::InvalidValue {
            key: LOG_LEVEL_VAR.to_string(),
            message: format!("expected a number from 0 to 6, got '{raw}'"),
        })
}

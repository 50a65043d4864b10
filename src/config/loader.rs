// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment loading.
//!
//! # Loader Pipeline
//!
//! ```text
//! EnvLoader::new()
//!   .with_vars()        (optional, replaces the process environment)
//!        |
//!        v
//! exact-case VCC_* names only
//!        |
//!        v
//! config::Environment::with_prefix("VCC")
//!        |
//!        v
//!    RawEnv { vscode_settings, dry_run, log_level, log_file }
//!        |
//!        v
//!    build() --> RunConfig
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use super::{ENV_PREFIX, ENV_VARS, RunConfig, env_flag, non_empty, parse_log_level};
use crate::error::ConfigError;

/// Variables as collected by the `config` crate, prefix stripped and
/// lower-cased. Values are kept as raw strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEnv {
    vscode_settings: Option<String>,
    dry_run: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

/// Builder for resolving a [`RunConfig`] from environment variables.
#[derive(Debug, Default)]
pub struct EnvLoader {
    vars: Option<config::Map<String, String>>,
}

impl EnvLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `vars` instead of the process environment.
    #[must_use]
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Collects the variables and resolves them into a [`RunConfig`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the variables cannot be collected and
    /// `ConfigError::InvalidValue` for an unparsable `VCC_LOG_LEVEL`.
    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let vars = self.vars.unwrap_or_else(process_vars);
        let environment =
            config::Environment::with_prefix(ENV_PREFIX).source(Some(known_vars(vars)));
        let raw: RawEnv = config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(RunConfig::builder()
            .maybe_settings_path(non_empty(raw.vscode_settings))
            .dry_run(env_flag(raw.dry_run.as_deref()))
            .log_level(parse_log_level(raw.log_level.as_deref())?)
            .maybe_log_file(non_empty(raw.log_file).map(PathBuf::from))
            .build())
    }
}

/// Process environment; entries that are not UTF-8 are skipped.
fn process_vars() -> config::Map<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Keeps the variables named exactly as documented. `config` matches the
/// prefix without regard to case, so `vcc_dry_run` would otherwise count.
fn known_vars(vars: config::Map<String, String>) -> config::Map<String, String> {
    vars.into_iter()
        .filter(|(key, _)| ENV_VARS.contains(&key.as_str()))
        .collect()
}

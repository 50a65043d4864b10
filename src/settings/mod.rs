// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! VS Code settings document.
//!
//! ```text
//! .vscode/settings.json (// and /* */ comments, trailing commas allowed)
//!        |
//!        v
//!   jsonc_parser --> serde_json::Value --> Settings
//!                                    configure_settings  "cmake.configureSettings"  {name: value}
//!                                    configure_args      "cmake.configureArgs"      [arg, ...]
//! ```
//!
//! Absent fields decode to empty containers. Every other key in the document
//! is ignored.

use std::collections::HashMap;
use std::path::Path;

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SettingsError;

/// Origin label for documents parsed from memory.
const MEMORY_ORIGIN: &str = "<memory>";

/// The CMake-related part of a VS Code settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// `-D` definitions. The map carries no order; see
    /// [`Settings::format_definitions`].
    #[serde(rename = "cmake.configureSettings", default)]
    configure_settings: HashMap<String, String>,

    /// Raw arguments, kept in document order.
    #[serde(rename = "cmake.configureArgs", default)]
    configure_args: Vec<String>,
}

impl Settings {
    /// Creates settings from already-decoded parts.
    #[must_use]
    pub const fn new(configure_settings: HashMap<String, String>, configure_args: Vec<String>) -> Self {
        Self {
            configure_settings,
            configure_args,
        }
    }

    /// Parses a settings document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Encoding`] for invalid UTF-8 and
    /// [`SettingsError::Syntax`] if the text is not JSON, comments and
    /// trailing commas aside. Returns [`SettingsError::Parse`] if
    /// `cmake.configureSettings` is not an object of strings or
    /// `cmake.configureArgs` is not an array of strings.
    pub fn parse(document: &[u8]) -> Result<Self, SettingsError> {
        Self::parse_with_origin(document, MEMORY_ORIGIN)
    }

    /// Reads and parses the settings file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] if the file cannot be read, or
    /// one of the errors described in [`Settings::parse`].
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let document = std::fs::read(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), bytes = document.len(), "read settings");
        Self::parse_with_origin(&document, &path.display().to_string())
    }

    fn parse_with_origin(document: &[u8], origin: &str) -> Result<Self, SettingsError> {
        let text = std::str::from_utf8(document).map_err(|source| SettingsError::Encoding {
            origin: origin.to_string(),
            source,
        })?;
        let options = ParseOptions {
            allow_comments: true,
            allow_trailing_commas: true,
            allow_loose_object_property_names: false,
            ..ParseOptions::default()
        };
        let value = jsonc_parser::parse_to_serde_value(text, &options).map_err(|source| {
            SettingsError::Syntax {
                origin: origin.to_string(),
                source,
            }
        })?;
        // A document without a value decodes like `null` and is rejected.
        let settings: Self = serde_json::from_value(value.unwrap_or_default()).map_err(|source| {
            SettingsError::Parse {
                origin: origin.to_string(),
                source,
            }
        })?;
        debug!(
            origin,
            definitions = settings.configure_settings.len(),
            args = settings.configure_args.len(),
            "parsed settings"
        );
        Ok(settings)
    }

    /// The `cmake.configureSettings` mapping.
    #[must_use]
    pub const fn configure_settings(&self) -> &HashMap<String, String> {
        &self.configure_settings
    }

    /// The `cmake.configureArgs` list, in document order.
    #[must_use]
    pub fn configure_args(&self) -> &[String] {
        &self.configure_args
    }
}

// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            VccError (~24 bytes)
//!                   |
//!     +---------+---+-----+---------+
//!     |         |         |         |
//!     v         v         v         v
//!  Settings   Config   Process     Io
//!    Box       Box       Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Settings  Read, Encoding, Syntax, Parse
//!   Config    Load, InvalidValue
//!   Process   ExecutableNotFound, SpawnFailed, WaitFailed
//!
//! Exit codes:
//!   Settings / Config / Io   1
//!   ExecutableNotFound       127
//!   SpawnFailed / WaitFailed 126
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`VccError`].
pub type VccResult<T> = std::result::Result<T, VccError>;

/// Exit code for unreadable or malformed input and configuration.
pub const EXIT_INPUT_ERROR: i32 = 1;

/// Exit code when cmake was found but could not be started.
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// Exit code when cmake is not on `PATH`.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum VccError {
    /// Settings document could not be read or decoded.
    #[error("settings error: {0}")]
    Settings(#[from] Box<SettingsError>),

    /// Environment configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl VccError {
    /// Exit code the program terminates with when this error reaches `main`.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Settings(_) | Self::Config(_) | Self::Io(_) => EXIT_INPUT_ERROR,
            Self::Process(err) => match err.as_ref() {
                ProcessError::ExecutableNotFound { .. } => EXIT_NOT_FOUND,
                ProcessError::SpawnFailed { .. } | ProcessError::WaitFailed { .. } => {
                    EXIT_CANNOT_EXECUTE
                }
            },
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for VccError {
                fn from(err: $error) -> Self {
                    VccError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    SettingsError => Settings,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Settings Errors ---

/// Errors reading or decoding the VS Code settings document.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not UTF-8.
    ///
    /// `origin` is the file path, or `<memory>` for in-memory documents.
    #[error("settings '{origin}' are not valid UTF-8: {source}")]
    Encoding {
        origin: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The document is not JSON, even allowing comments and trailing commas.
    #[error("invalid JSON in settings '{origin}': {source}")]
    Syntax {
        origin: String,
        #[source]
        source: jsonc_parser::errors::ParseError,
    },

    /// A recognized field has the wrong shape, or the document is not an
    /// object.
    #[error("failed to parse settings '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

// --- Config Errors ---

/// Environment configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variables could not be collected or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A variable holds a value outside its accepted range.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to wait for a spawned process.
    #[error("failed to wait for process '{command}': {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;

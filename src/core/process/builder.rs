// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new/which
//!  • arg/args/name
//!
//! ProcessOutput { exit_code, signal }
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::ProcessError;

/// Exit status of a completed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutput {
    exit_code: i32,
    signal: Option<i32>,
}

impl ProcessOutput {
    /// Offset added to a terminating signal number, as shells report it.
    pub const SIGNAL_EXIT_BASE: i32 = 128;

    pub(super) const fn exited(exit_code: i32) -> Self {
        Self {
            exit_code,
            signal: None,
        }
    }

    pub(super) const fn signaled(signal: i32) -> Self {
        Self {
            exit_code: Self::SIGNAL_EXIT_BASE + signal,
            signal: Some(signal),
        }
    }

    /// Returns the exit code; `128 + N` when the process was killed by signal `N`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns the terminating signal, if any.
    #[must_use]
    pub const fn signal(&self) -> Option<i32> {
        self.signal
    }
}

/// Builder for configuring and running a process.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    /// Path to the executable
    program: PathBuf,
    /// Command-line arguments, passed through unmodified
    args: Vec<OsString>,
    /// Display name for logging
    name: Option<String>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// A bare name is resolved via PATH by the operating system at spawn time.
    #[must_use]
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            name: None,
        }
    }

    /// Creates a `ProcessBuilder` after resolving the program via PATH.
    ///
    /// The display name defaults to `program` as given, not the resolved path.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if the executable is not found in PATH.
    pub fn which(program: &str) -> Result<Self, ProcessError> {
        let path = which::which(program).map_err(|_| ProcessError::ExecutableNotFound {
            name: program.to_string(),
        })?;
        Ok(Self::new(path).name(program))
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    /// Sets a display name for logging.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns a reference to the program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Returns a slice of the arguments.
    #[must_use]
    pub fn args_slice(&self) -> &[OsString] {
        &self.args
    }

    /// Returns the display name for this process.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.program.file_stem().map_or_else(
                || "process".to_string(),
                |s| s.to_string_lossy().into_owned(),
            )
        })
    }
}

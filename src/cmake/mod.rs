// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CMake` argument construction.
//!
//! ```text
//! Settings                      process args
//!   configure_settings --+           |
//!     -D<NAME>=quote(v)  |           |
//!     sorted by token    |           |
//!   configure_args ------+           |
//!                        v           v
//!        [ -D flags.. | configure_args.. | process args.. ]
//! ```
//!
//! Later arguments override earlier ones in `CMake`, so process arguments come
//! last.

use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use crate::settings::Settings;
use crate::utility::shell::quote;

/// Executable invoked to configure the project, resolved via `PATH`.
pub const CMAKE_PROGRAM: &str = "cmake";

/// Formats a single `-D<NAME>=<VALUE>` definition with a shell-quoted value.
#[must_use]
pub fn format_definition(name: &str, value: &str) -> String {
    format!("-D{name}={}", quote(value))
}

/// Formats every definition and sorts the result by token.
///
/// `HashMap` iteration order is unspecified, so the sort is what makes the
/// output stable.
#[must_use]
pub fn format_definitions<S: std::hash::BuildHasher>(
    definitions: &HashMap<String, String, S>,
) -> Vec<String> {
    let mut args: Vec<String> = definitions
        .iter()
        .map(|(name, value)| format_definition(name, value))
        .collect();
    args.sort_unstable();
    args
}

/// Builds the full `CMake` argument vector.
#[must_use]
pub fn compose<S: AsRef<str>>(settings: &Settings, process_args: &[S]) -> Vec<String> {
    let definitions = format_definitions(settings.configure_settings());
    let mut args =
        Vec::with_capacity(definitions.len() + settings.configure_args().len() + process_args.len());
    args.extend(definitions);
    args.extend(settings.configure_args().iter().cloned());
    args.extend(process_args.iter().map(|arg| arg.as_ref().to_string()));
    args
}

/// [`compose`] for process arguments taken from the OS, which need not be
/// UTF-8. They are passed through byte for byte.
#[must_use]
pub fn compose_os<S: AsRef<OsStr>>(settings: &Settings, process_args: &[S]) -> Vec<OsString> {
    let from_settings = compose::<&str>(settings, &[]);
    let mut args = Vec::with_capacity(from_settings.len() + process_args.len());
    args.extend(from_settings.into_iter().map(OsString::from));
    args.extend(process_args.iter().map(|arg| arg.as_ref().to_os_string()));
    args
}

/// Renders a command line for display, one space between tokens.
///
/// Tokens are printed as they are; `-D` values already carry their quoting.
/// Bytes that are not UTF-8 show as U+FFFD.
#[must_use]
pub fn command_line<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    std::iter::once(Cow::Borrowed(program))
        .chain(args.iter().map(|arg| arg.as_ref().to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Settings {
    /// `-D` flags for `cmake.configureSettings`, sorted by token.
    #[must_use]
    pub fn format_definitions(&self) -> Vec<String> {
        format_definitions(self.configure_settings())
    }

    /// Definitions, then `cmake.configureArgs`, then `process_args`.
    #[must_use]
    pub fn compose<S: AsRef<str>>(&self, process_args: &[S]) -> Vec<String> {
        compose(self, process_args)
    }

    /// Same as [`Settings::compose`], keeping OS strings intact.
    #[must_use]
    pub fn compose_os<S: AsRef<OsStr>>(&self, process_args: &[S]) -> Vec<OsString> {
        compose_os(self, process_args)
    }
}

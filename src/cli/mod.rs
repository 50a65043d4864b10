// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for vcc-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! vcc -h | --help        → print help, exit 0
//! vcc [cmake args...]    → configure, args forwarded to cmake verbatim
//! ```
//!
//! The raw arguments are classified by [`Invocation::from_args`] without
//! going through clap, so every token reaches cmake untouched. clap only
//! describes the interface and renders the help text.


use std::ffi::OsString;

use clap::{CommandFactory, Parser};

/// Help epilogue listing the environment variables.
const AFTER_HELP: &str = "ENVIRONMENT:\n\n\
    VCC_VSCODE_SETTINGS  Settings file to read (default: .vscode/settings.json)\n\
    VCC_DRY_RUN          Print the cmake command without running it.\n\
    \x20                    \"0\" and \"false\" disable it, any other value enables it.\n\
    VCC_LOG_LEVEL        Log verbosity on stderr, 0-6 (default: 2)\n\
    VCC_LOG_FILE         Also write a trace log to this file\n\n\
    EXAMPLES:\n\n\
    \x20 $ vcc -B mybuild .\n\
    \x20 $ cmake --build mybuild\n\
    \x20 $ env VCC_DRY_RUN=1 vcc -B mybuild .\n\
    \x20 $ env VCC_VSCODE_SETTINGS=path/to/mysettings.json vcc -B mybuild .";

/// VS Code CMake Configure
///
/// Configures a `CMake` project on the command line using the VS Code
/// settings file.
#[derive(Debug, Parser)]
#[command(
    name = "vcc",
    author,
    version,
    about = "Configure a CMake project using VS Code settings",
    long_about = "vcc-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Configures a CMake project on the command line, using the\n\
                  'cmake.configureSettings' and 'cmake.configureArgs' entries of\n\
                  the VS Code settings file '.vscode/settings.json'.\n\n\
                  Settings become -DNAME=VALUE flags, sorted by name, followed by\n\
                  the configure arguments and then every argument given to vcc,\n\
                  so arguments on the command line override the settings file.\n\
                  Most of the time you'll call it once to configure the project\n\
                  and then continue with plain cmake.",
    after_long_help = AFTER_HELP,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Arguments appended to the cmake command line, after the settings.
    #[arg(
        value_name = "CMAKE_ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub cmake_args: Vec<OsString>,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A leading `-h` or `--help`.
    Help,
    /// Configure, appending these arguments.
    Configure(Vec<OsString>),
}

impl Invocation {
    /// Classifies the arguments that follow the program name.
    ///
    /// Only the first token is checked for help; a later `-h` belongs to
    /// cmake.
    #[must_use]
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match args.first().and_then(|arg| arg.to_str()) {
            Some("-h" | "--help") => Self::Help,
            _ => Self::Configure(args),
        }
    }

    /// Classifies the arguments of the running process.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os().skip(1))
    }
}

/// Renders the long help text.
#[must_use]
pub fn render_help() -> String {
    Cli::command().render_long_help().to_string()
}

// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Everything after the program name belongs to cmake, except a leading help
//! flag.

use std::ffi::OsString;

use vcc_rs::cli::{Invocation, render_help};

fn invocation(args: &[&str]) -> Invocation {
    Invocation::from_args(args.iter().copied())
}

fn configure(args: &[&str]) -> Invocation {
    Invocation::Configure(args.iter().map(OsString::from).collect())
}

// =============================================================================
// Pass-through
// =============================================================================

#[test]
fn cli_typical_configure_invocation() {
    let args = ["-S", ".", "-B", "build", "-G", "Ninja Multi-Config"];
    assert_eq!(invocation(&args), configure(&args));
}

#[test]
fn cli_definitions_and_long_flags() {
    let args = [
        "-DCMAKE_BUILD_TYPE=Release",
        "--fresh",
        "--preset=default",
        "-Wno-dev",
    ];
    assert_eq!(invocation(&args), configure(&args));
}

#[test]
fn cli_arguments_with_spaces_stay_whole() {
    let args = ["-DCMAKE_CXX_FLAGS=-O2 -g", "path with spaces"];
    assert_eq!(invocation(&args), configure(&args));
}

#[test]
fn cli_double_dash_is_kept() {
    let args = ["--", "-B", "b"];
    assert_eq!(invocation(&args), configure(&args));
}

#[test]
fn cli_short_flags_that_look_like_ours() {
    let args = ["-V", "-v", "--verbose"];
    assert_eq!(invocation(&args), configure(&args));
}

// =============================================================================
// Help
// =============================================================================

#[test]
fn cli_help_only_when_first() {
    assert_eq!(invocation(&["-h"]), Invocation::Help);
    assert_eq!(invocation(&["--help", "."]), Invocation::Help);
    assert_eq!(invocation(&[".", "--help"]), configure(&[".", "--help"]));
}

#[test]
fn cli_help_text_describes_settings_fields() {
    let help = render_help();
    assert!(help.contains("cmake.configureArgs"));
    assert!(help.contains("cmake.configureSettings"));
    assert!(help.contains(".vscode/settings.json"));
}

// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for settings parsing and argument composition.

use std::collections::HashMap;

use vcc_rs::cmake::{compose, format_definitions};
use vcc_rs::settings::Settings;

const SAMPLE: &str = r#"{"cmake.configureArgs":["-GNinja"],"cmake.configureSettings":{"CMAKE_CXX_COMPILER":"clang++","CMAKE_CXX_FLAGS_INIT":"-fdiagnostics-color=always -O3","CMAKE_CXX_STANDARD":"17","CMAKE_CXX_STANDARD_REQUIRED":"ON"}}"#;

const VSCODE_SETTINGS: &str = r#"// Workspace settings
{
    "files.trimTrailingWhitespace": true,
    "cmake.configureSettings": {
        // Toolchain
        "CMAKE_CXX_COMPILER": "clang++",
        "CMAKE_CXX_FLAGS_INIT": "-fdiagnostics-color=always -O3", /* color output */
        "CMAKE_CXX_STANDARD": "17",
        "CMAKE_CXX_STANDARD_REQUIRED": "ON"
    },
    "cmake.configureArgs": [
        "-GNinja" // generator
    ],
    "[cpp]": { "editor.formatOnSave": true }
}
"#;

fn expected() -> Vec<&'static str> {
    vec![
        "-DCMAKE_CXX_COMPILER=clang++",
        "-DCMAKE_CXX_FLAGS_INIT='-fdiagnostics-color=always -O3'",
        "-DCMAKE_CXX_STANDARD=17",
        "-DCMAKE_CXX_STANDARD_REQUIRED=ON",
        "-GNinja",
        "-h",
    ]
}

#[test]
fn compose_end_to_end() {
    let settings = Settings::parse(SAMPLE.as_bytes()).unwrap();
    assert_eq!(settings.compose(&["-h"]), expected());
}

#[test]
fn compose_end_to_end_with_comments_and_unrelated_keys() {
    let settings = Settings::parse(VSCODE_SETTINGS.as_bytes()).unwrap();
    assert_eq!(settings, Settings::parse(SAMPLE.as_bytes()).unwrap());
    assert_eq!(compose(&settings, &["-h"]), expected());
}

#[test]
fn process_args_come_last_so_they_can_override() {
    let settings = Settings::parse(SAMPLE.as_bytes()).unwrap();
    let args = settings.compose(&["-DCMAKE_CXX_STANDARD=20", "-GUnix Makefiles"]);
    assert_eq!(args.len(), 7);
    assert_eq!(&args[5..], ["-DCMAKE_CXX_STANDARD=20", "-GUnix Makefiles"]);
}

#[test]
fn definitions_ignore_insertion_order() {
    let forward: HashMap<String, String> = (0..32)
        .map(|i| (format!("VAR_{i:02}"), format!("value {i}")))
        .collect();
    let mut backward = HashMap::new();
    for i in (0..32).rev() {
        backward.insert(format!("VAR_{i:02}"), format!("value {i}"));
    }

    let formatted = format_definitions(&forward);
    assert_eq!(formatted, format_definitions(&backward));
    assert_eq!(formatted[0], "-DVAR_00='value 0'");
    assert_eq!(formatted[31], "-DVAR_31='value 31'");
}

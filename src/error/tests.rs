// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    ConfigError, EXIT_CANNOT_EXECUTE, EXIT_INPUT_ERROR, EXIT_NOT_FOUND, ProcessError,
    SettingsError, VccError, VccResult,
};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        key: "VCC_LOG_LEVEL".to_string(),
        message: "log level must be 0-6, got 9".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'VCC_LOG_LEVEL': log level must be 0-6, got 9");
}

#[test]
fn test_process_error_display() {
    let err = VccError::from(ProcessError::ExecutableNotFound {
        name: "cmake".to_string(),
    });
    insta::assert_snapshot!(err.to_string(), @"process error: executable not found: 'cmake' (not in PATH)");
}

#[test]
fn test_exit_codes() {
    let read = VccError::from(SettingsError::Read {
        path: ".vscode/settings.json".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    });
    let not_found = VccError::from(ProcessError::ExecutableNotFound {
        name: "cmake".to_string(),
    });
    let spawn = VccError::from(ProcessError::SpawnFailed {
        command: "cmake".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    });
    let io = VccError::from(std::io::Error::other("broken pipe"));

    assert_eq!(read.exit_code(), EXIT_INPUT_ERROR);
    assert_eq!(not_found.exit_code(), EXIT_NOT_FOUND);
    assert_eq!(spawn.exit_code(), EXIT_CANNOT_EXECUTE);
    assert_eq!(io.exit_code(), EXIT_INPUT_ERROR);
}

#[test]
fn test_vcc_error_size() {
    let size = std::mem::size_of::<VccError>();
    assert!(size <= 24, "VccError is {size} bytes, expected <= 24");
}

#[test]
fn test_vcc_result_size() {
    let size = std::mem::size_of::<VccResult<()>>();
    assert!(size <= 24, "VccResult<()> is {size} bytes, expected <= 24");
}

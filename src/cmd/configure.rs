// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The configure command.
//!
//! ```text
//! RunConfig.settings_path --> Settings::read
//!                                  |
//!                 compose_os(settings, process args)
//!                                  |
//!                  "Running command:" --> out (always)
//!                                  |
//!                 dry run? --yes--> 0
//!                                  |
//!                   which("cmake") --> run_inherited --> exit code
//! ```

use std::ffi::OsStr;
use std::io::Write;

use tracing::{debug, info};

use crate::cmake::{CMAKE_PROGRAM, command_line};
use crate::config::RunConfig;
use crate::core::process::builder::ProcessBuilder;
use crate::error::VccResult;
use crate::settings::Settings;

/// Writes the command line banner.
///
/// # Errors
///
/// Returns an I/O error if `out` cannot be written.
pub fn write_command<W: Write, S: AsRef<OsStr>>(
    out: &mut W,
    program: &str,
    args: &[S],
) -> std::io::Result<()> {
    write!(out, "Running command:\n\t{}\n\n", command_line(program, args))?;
    out.flush()
}

/// Reads the settings, prints the composed cmake command and, unless this is
/// a dry run, runs it.
///
/// Returns the exit code to terminate with: `0` for a dry run, otherwise
/// cmake's own.
///
/// # Errors
///
/// Returns a `VccError` if the settings cannot be read or parsed, the
/// command line cannot be written, or cmake cannot be found or started.
pub async fn run_configure_command<W: Write, S: AsRef<OsStr>>(
    config: &RunConfig,
    process_args: &[S],
    out: &mut W,
) -> VccResult<i32> {
    let settings = Settings::read(config.settings_path())?;
    let args = settings.compose_os(process_args);

    write_command(out, CMAKE_PROGRAM, &args)?;

    if config.dry_run() {
        info!("dry run, not running {CMAKE_PROGRAM}");
        return Ok(0);
    }

    let builder = ProcessBuilder::which(CMAKE_PROGRAM)?;
    debug!(program = %builder.program().display(), "resolved cmake");

    let output = builder.args(&args).run_inherited().await?;
    info!(exit_code = output.exit_code(), "cmake finished");
    Ok(output.exit_code())
}

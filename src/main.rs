// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! Invocation::from_env() --> Help? --> print, exit 0
//!       |
//!       v
//! RunConfig::from_env() --> Logging --> run_configure_command
//! ```

use std::process::ExitCode;

use vcc_rs::cli::{Invocation, render_help};
use vcc_rs::cmd::configure::run_configure_command;
use vcc_rs::config::RunConfig;
use vcc_rs::error::EXIT_INPUT_ERROR;
use vcc_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let process_args = match Invocation::from_env() {
        Invocation::Help => {
            println!("{}", render_help());
            return ExitCode::SUCCESS;
        }
        Invocation::Configure(args) => args,
    };

    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return exit_code(EXIT_INPUT_ERROR);
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "resolved configuration");

    match run_configure_command(&config, &process_args, &mut std::io::stdout()).await {
        Ok(code) => exit_code(code),
        Err(e) => {
            tracing::debug!(error = ?e, "configure failed");
            eprintln!("Error: {e}");
            exit_code(e.exit_code())
        }
    }
}

fn build_log_config(config: &RunConfig) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.log_level())
        .maybe_with_log_file(config.log_file())
        .build()
}

/// Converts a child or internal exit code to the process exit status.
///
/// Codes outside `0..=255` cannot be represented portably and map to
/// `u8::MAX`.
fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}

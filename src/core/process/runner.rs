// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution with inherited standard streams.
//!
//! ```text
//! run_inherited()
//!        |
//!        v
//!  build_command()
//!  args, stdin/stdout/stderr inherited
//!        |
//!        v
//!     spawn() --err--> ProcessError::SpawnFailed
//!        |
//!        v
//!     wait()  --err--> ProcessError::WaitFailed
//!        |
//!        v
//!  ProcessOutput { exit_code, signal }
//! ```

use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::error::ProcessError;

impl ProcessBuilder {
    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            cmd.push(' ');
            cmd.push_str(&arg.to_string_lossy());
        }
        cmd
    }

    /// Spawns the process attached to this process's stdin, stdout and
    /// stderr, and waits for it to finish.
    ///
    /// A non-zero exit is not an error; the code is returned in the output.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if the process cannot be started
    /// and `ProcessError::WaitFailed` if waiting on it fails.
    pub async fn run_inherited(self) -> Result<ProcessOutput, ProcessError> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        debug!(cmd = %cmd_line, "exec");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: name.clone(),
                source,
            })?;

        trace!(process = %name, pid = ?child.id(), "spawned");

        let status = child
            .wait()
            .await
            .map_err(|source| ProcessError::WaitFailed {
                command: name.clone(),
                source,
            })?;

        let output = output_from_status(status);
        trace!(
            process = %name,
            exit_code = output.exit_code(),
            signal = ?output.signal(),
            "completed"
        );
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command
            .args(self.args_slice())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        command
    }
}

#[cfg(unix)]
fn output_from_status(status: ExitStatus) -> ProcessOutput {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => ProcessOutput::exited(code),
        (None, Some(signal)) => ProcessOutput::signaled(signal),
        (None, None) => ProcessOutput::exited(1),
    }
}

#[cfg(not(unix))]
fn output_from_status(status: ExitStatus) -> ProcessOutput {
    ProcessOutput::exited(status.code().unwrap_or(1))
}

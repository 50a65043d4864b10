// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::which("cmake")
//!   .args() .name()
//!   .run_inherited()
//!       --> tokio::process::Command (stdio inherited)
//!       --> ProcessOutput { exit_code, signal }
//! ```

pub mod builder;
mod runner;

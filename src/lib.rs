// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)        config (VCC_* env)
//!                |                     |
//!                +----------+----------+
//!                           v
//!                 cmd::configure (driver)
//!                           |
//!          +----------------+---------------+
//!          v                v               v
//!      settings           cmake       core::process
//!   JSONC -> Settings  -D flags,      cmake, inherited
//!                      composition    stdio
//!                           |
//!                           v
//!                    utility::shell
//!                      quote()
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmake;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod settings;
pub mod utility;

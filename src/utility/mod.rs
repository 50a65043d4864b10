// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! shell
//!   quote()        POSIX single-quote escaping
//!   is_safe_char() characters that never need quoting
//! ```

pub mod shell;

// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! POSIX shell quoting.
//!
//! ```text
//! ""                 --> ''
//! clang++            --> clang++            (safe set only)
//! -O3 -g             --> '-O3 -g'
//! it's               --> 'it'"'"'s'
//!
//! safe set: ASCII alphanumerics and _ @ % + = : , . / -
//! ```
//!
//! A quoted token, when split by a POSIX shell, yields the original string
//! byte-for-byte.

use std::borrow::Cow;

/// Replacement for an embedded single quote: close, quoted quote, reopen.
const ESCAPED_SINGLE_QUOTE: &str = r#"'"'"'"#;

/// Returns true if `c` never needs quoting in a POSIX shell word.
#[must_use]
pub const fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

/// Quotes `value` so a POSIX shell reads it back as a single word.
///
/// Strings made only of safe characters are returned unchanged. Everything
/// else, including the empty string, is wrapped in single quotes.
#[must_use]
pub fn quote(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        return Cow::Borrowed("''");
    }

    if value.chars().all(is_safe_char) {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    quoted.push_str(&value.replace('\'', ESCAPED_SINGLE_QUOTE));
    quoted.push('\'');
    Cow::Owned(quoted)
}

#[cfg(test)]
mod tests;

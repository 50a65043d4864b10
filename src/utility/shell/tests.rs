// vcc-rs: VS Code CMake Configure
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::borrow::Cow;

use proptest::prelude::*;

use super::{is_safe_char, quote};

/// Reads back one shell word using POSIX quoting rules (single quotes,
/// double quotes and backslash).
fn unquote(word: &str) -> String {
    let mut out = String::new();
    let mut chars = word.chars();
    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                for inner in chars.by_ref() {
                    if inner == '\'' {
                        break;
                    }
                    out.push(inner);
                }
            }
            '"' => {
                while let Some(inner) = chars.next() {
                    match inner {
                        '"' => break,
                        '\\' => match chars.next() {
                            Some(next @ ('$' | '`' | '"' | '\\')) => out.push(next),
                            Some('\n') => {}
                            Some(next) => {
                                out.push('\\');
                                out.push(next);
                            }
                            None => out.push('\\'),
                        },
                        _ => out.push(inner),
                    }
                }
            }
            '\\' => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            _ => out.push(c),
        }
    }
    out
}

#[test]
fn test_quote_empty() {
    assert_eq!(quote(""), "''");
}

#[test]
fn test_quote_safe_values_unchanged() {
    for value in [
        "clang++",
        "17",
        "ON",
        "/usr/local/bin/gcc-13",
        "user@host:1.2,3%4=5",
        "-fdiagnostics-color=always",
    ] {
        let quoted = quote(value);
        assert!(matches!(quoted, Cow::Borrowed(_)), "{value} should borrow");
        assert_eq!(quoted, value);
    }
}

#[test]
fn test_quote_whitespace() {
    insta::assert_snapshot!(quote("-fdiagnostics-color=always -O3"), @"'-fdiagnostics-color=always -O3'");
}

#[test]
fn test_quote_single_quote() {
    insta::assert_snapshot!(quote("it's"), @r#"'it'"'"'s'"#);
}

#[test]
fn test_quote_metacharacters() {
    let quoted: Vec<_> = ["$HOME", "a;b", "x|y", "*.cpp", "é", "tab\there"]
        .into_iter()
        .map(|v| quote(v).into_owned())
        .collect();
    insta::assert_debug_snapshot!(quoted, @r#"
    [
        "'$HOME'",
        "'a;b'",
        "'x|y'",
        "'*.cpp'",
        "'é'",
        "'tab\there'",
    ]
    "#);
}

#[test]
fn test_safe_char_set() {
    assert!(is_safe_char('A'));
    assert!(is_safe_char('_'));
    assert!(is_safe_char('/'));
    assert!(!is_safe_char(' '));
    assert!(!is_safe_char('\''));
    assert!(!is_safe_char('"'));
    assert!(!is_safe_char('~'));
    assert!(!is_safe_char('ü'));
}

#[cfg(unix)]
#[test]
fn test_quote_round_trips_through_sh() {
    for value in [
        "",
        "plain",
        "two words",
        "it's",
        "''",
        r#"mixed "double" and 'single'"#,
        "$(echo nope) `nope` $HOME",
        "back\\slash",
        "new\nline",
        "glob * ? [a]",
    ] {
        let script = format!("printf '%s' {}", quote(value));
        let output = std::process::Command::new("/bin/sh")
            .arg("-c")
            .arg(&script)
            .output()
            .expect("sh should run");
        assert!(output.status.success(), "sh failed for {script}");
        assert_eq!(String::from_utf8_lossy(&output.stdout), value);
    }
}

proptest! {
    #[test]
    fn prop_quote_round_trips(value in any::<String>()) {
        prop_assert_eq!(unquote(&quote(&value)), value);
    }

    #[test]
    fn prop_safe_values_are_not_quoted(value in "[A-Za-z0-9_@%+=:,./-]+") {
        let quoted = quote(&value);
        prop_assert_eq!(quoted.as_ref(), value.as_str());
    }

    #[test]
    fn prop_unsafe_values_are_single_quoted(value in ".*[^A-Za-z0-9_@%+=:,./-].*") {
        let quoted = quote(&value);
        prop_assert!(quoted.starts_with('\''));
        prop_assert!(quoted.ends_with('\''));
    }
}

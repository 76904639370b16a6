/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use indexmap::IndexMap;

use crate::cli::Cli;
use crate::error::{ValidationError, Violation};

/// Flags as they come off the command line, keyed by whatever casing the
/// caller used. Insertion order is kept so violations report in order.
pub type RawFlags = IndexMap<String, FlagValue>;

/// Validated flags keyed by their canonical snake_case name.
pub type NormalizedOptions = IndexMap<String, FlagValue>;

/// The primitive value an untyped argv parser produces.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Bool(bool),
    Str(String),
    Num(f64),
}

static BOOLEANS: &[&str] = &["jsx", "editorconfig", "end-with-newline", "preserve-newlines"];
static STRINGS: &[&str] = &["eol", "indent-character"];
static NUMBERS: &[&str] = &["indent-level", "indent-size", "max-preserve-newlines"];

impl FlagValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FlagValue::Bool(_) => "boolean",
            FlagValue::Str(_) => "string",
            FlagValue::Num(_) => "number",
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(value) => write!(f, "{}", value),
            FlagValue::Str(value) => write!(f, "{}", value),
            // Numbers print the way a dynamic runtime stringifies them:
            // no fraction digits on integral values, Infinity on overflow.
            FlagValue::Num(value) if value.is_infinite() => {
                write!(f, "{}Infinity", if *value < 0.0 { "-" } else { "" })
            }
            FlagValue::Num(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", *value as i64)
            }
            FlagValue::Num(value) => write!(f, "{}", value),
        }
    }
}

/// Extract the flags explicitly passed on the command line. Defaults are
/// the formatter's business and never appear here.
pub fn raw_flags(cli: &Cli) -> RawFlags {
    let mut raw = RawFlags::new();
    presence(&mut raw, "jsx", &cli.jsx, cli.no_jsx);
    presence(&mut raw, "editorconfig", &cli.editorconfig, cli.no_editorconfig);
    presence(
        &mut raw,
        "end-with-newline",
        &cli.end_with_newline,
        cli.no_end_with_newline,
    );
    value(&mut raw, "eol", &cli.eol);
    value(&mut raw, "indent-character", &cli.indent_character);
    value(&mut raw, "indent-level", &cli.indent_level);
    value(&mut raw, "indent-size", &cli.indent_size);
    value(&mut raw, "max-preserve-newlines", &cli.max_preserve_newlines);
    presence(
        &mut raw,
        "preserve-newlines",
        &cli.preserve_newlines,
        cli.no_preserve_newlines,
    );
    raw
}

fn presence(raw: &mut RawFlags, name: &str, flag: &Option<Option<String>>, negated: bool) {
    if negated {
        raw.insert(name.to_string(), FlagValue::Bool(false));
        return;
    }
    match flag {
        Some(Some(text)) => {
            raw.insert(name.to_string(), infer(text));
        }
        Some(None) => {
            raw.insert(name.to_string(), FlagValue::Bool(true));
        }
        None => {}
    }
}

fn value(raw: &mut RawFlags, name: &str, flag: &Option<String>) {
    if let Some(text) = flag {
        raw.insert(name.to_string(), infer(text));
    }
}

/// Untyped argv parsers turn numeric-looking text into numbers and leave
/// everything else a string; booleans only arise from bare presence.
fn infer(text: &str) -> FlagValue {
    match parse_number(text) {
        Some(number) => FlagValue::Num(number),
        None => FlagValue::Str(text.to_string()),
    }
}

fn parse_number(text: &str) -> Option<f64> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return i64::from_str_radix(hex, 16).ok().map(|n| n as f64);
        }
        return None;
    }
    if looks_like_decimal(text) {
        return text.parse().ok();
    }
    None
}

/// `[-+]? ( digits [ '.' digits* ] | '.' digits ) ( 'e' [-+]? digits )?`
fn looks_like_decimal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let mut integer = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        integer += 1;
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let mut fraction = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            fraction += 1;
            i += 1;
        }
        if integer == 0 && fraction == 0 {
            return false;
        }
    } else if integer == 0 {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'e' {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let mut exponent = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            exponent += 1;
            i += 1;
        }
        if exponent == 0 {
            return false;
        }
    }
    i == bytes.len()
}

/// Rewrite every key to kebab-case, check classified flags against their
/// declared type, and re-key the survivors to snake_case. All violations
/// are collected before failing; unrecognized flags pass through with
/// only the key rename.
pub fn normalize(raw: RawFlags) -> Result<NormalizedOptions, ValidationError> {
    let entries: Vec<(String, FlagValue)> = raw
        .into_iter()
        .map(|(name, value)| (to_kebab_case(&name), value))
        .collect();

    let violations: Vec<Violation> = entries
        .iter()
        .filter_map(|(name, value)| check(name, value))
        .collect();
    if !violations.is_empty() {
        return Err(ValidationError { violations });
    }

    Ok(entries
        .into_iter()
        .map(|(name, value)| (to_snake_case(&name), value))
        .collect())
}

fn check(name: &str, value: &FlagValue) -> Option<Violation> {
    let expected = if BOOLEANS.contains(&name) {
        "boolean"
    } else if STRINGS.contains(&name) {
        "string"
    } else if NUMBERS.contains(&name) {
        "number"
    } else {
        return None;
    };
    if value.type_name() == expected {
        return None;
    }
    Some(Violation {
        name: name.to_string(),
        value: value.clone(),
        expected,
        actual: value.type_name(),
    })
}

pub fn to_kebab_case(text: &str) -> String {
    join_words(text, "-")
}

pub fn to_snake_case(text: &str) -> String {
    join_words(text, "_")
}

fn join_words(text: &str, separator: &str) -> String {
    words(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Split on separators and on case or digit boundaries, so `indentSize`,
/// `INDENT_SIZE`, `indent-size` and `Indent Size` all yield the same words.
/// An acronym run ends one character before its trailing lowercase, which
/// keeps `HTMLParser` as `HTML` + `Parser`.
fn words(text: &str) -> Vec<String> {
    #[derive(Clone, Copy, PartialEq)]
    enum Kind {
        Lower,
        Upper,
        Digit,
        Other,
    }
    fn kind(c: char) -> Kind {
        if c.is_ascii_digit() {
            Kind::Digit
        } else if c.is_uppercase() {
            Kind::Upper
        } else if c.is_alphabetic() {
            Kind::Lower
        } else {
            Kind::Other
        }
    }

    let chars: Vec<char> = text.chars().collect();
    let mut result = Vec::new();
    let mut word = String::new();
    let mut previous = Kind::Other;
    for (i, &c) in chars.iter().enumerate() {
        let current = kind(c);
        if current == Kind::Other {
            if !word.is_empty() {
                result.push(std::mem::take(&mut word));
            }
            previous = current;
            continue;
        }
        let boundary = match (previous, current) {
            (Kind::Lower, Kind::Upper) => true,
            (Kind::Digit, Kind::Lower | Kind::Upper) => true,
            (Kind::Lower | Kind::Upper, Kind::Digit) => true,
            (Kind::Upper, Kind::Upper) => chars
                .get(i + 1)
                .map(|&next| kind(next) == Kind::Lower)
                .unwrap_or(false),
            _ => false,
        };
        if boundary && !word.is_empty() {
            result.push(std::mem::take(&mut word));
        }
        word.push(c);
        previous = current;
    }
    if !word.is_empty() {
        result.push(word);
    }
    result
}

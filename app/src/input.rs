/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;
use std::fs::File;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use glob::MatchOptions;

use crate::error::CliError;

/// One piece of markup to format, tied to where its result must go:
/// back to `path` when it came from a file, to stdout when it came
/// from stdin.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceUnit {
    pub path: Option<PathBuf>,
    pub content: String,
}

/// Gather everything to format. With no patterns the source is stdin;
/// otherwise each pattern is expanded and only `.html` files are kept.
pub fn collect(patterns: &[String]) -> Result<Vec<SourceUnit>, CliError> {
    if patterns.is_empty() {
        collect_stdin()
    } else {
        collect_files(patterns)
    }
}

fn collect_stdin() -> Result<Vec<SourceUnit>, CliError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::MissingInput);
    }
    units_from_reader(&mut stdin.lock())
}

fn units_from_reader<R: std::io::Read>(reader: &mut R) -> Result<Vec<SourceUnit>, CliError> {
    let content = read_to_string(reader).context("Could not read stdin")?;
    if content.is_empty() {
        return Err(CliError::MissingInput);
    }
    Ok(vec![SourceUnit {
        path: None,
        content,
    }])
}

fn collect_files(patterns: &[String]) -> Result<Vec<SourceUnit>, CliError> {
    let mut units = Vec::new();
    for path in resolve_patterns(patterns)? {
        let mut file = File::open(&path)
            .with_context(|| format!("Could not open {}", path.display()))?;
        let content = read_to_string(&mut file)
            .with_context(|| format!("Could not read {}", path.display()))?;
        units.push(SourceUnit {
            path: Some(path),
            content,
        });
    }
    Ok(units)
}

/// Expand every pattern in order, keeping only `.html` files and dropping
/// paths that an earlier pattern already produced.
fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, CliError> {
    // Hidden files only match a literal leading dot, like the usual globbers.
    let mut options = MatchOptions::new();
    options.require_literal_leading_dot = true;

    let mut seen = HashSet::new();
    let mut paths = Vec::new();
    for pattern in patterns {
        let entries = glob::glob_with(pattern, options)
            .with_context(|| format!("Invalid glob pattern {pattern}"))?;
        for entry in entries {
            let path = entry.with_context(|| format!("Could not resolve pattern {pattern}"))?;
            if !path.is_file() {
                continue;
            }
            if path.extension().map_or(true, |extension| extension != "html") {
                continue;
            }
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }
    Ok(paths)
}

/// Taken from helix-editor
/// Reads the first chunk from a Reader into the given buffer
/// and detects the encoding, from the BOM when one is present and
/// from a `chardetng` sample otherwise. The decoder it hands back
/// strips the BOM on its own.
fn read_and_detect_encoding<R: std::io::Read + ?Sized>(
    reader: &mut R,
    buf: &mut [u8],
) -> anyhow::Result<(encoding_rs::Decoder, usize)> {
    let read = reader.read(buf)?;
    let is_empty = read == 0;
    let encoding = encoding_rs::Encoding::for_bom(buf)
        .map(|(encoding, _bom_size)| encoding)
        .unwrap_or_else(|| {
            let mut encoding_detector = chardetng::EncodingDetector::new();
            encoding_detector.feed(buf, is_empty);
            encoding_detector.guess(None, true)
        });

    Ok((encoding.new_decoder(), read))
}

/// Taken from helix-editor
fn read_to_string<R: std::io::Read + ?Sized>(reader: &mut R) -> anyhow::Result<String> {
    let mut buf = [0u8; 0x2000];

    let (mut decoder, read) = read_and_detect_encoding(reader, &mut buf)?;

    let mut slice = &buf[..read];
    let mut is_empty = read == 0;
    let mut buf_string = String::with_capacity(buf.len());

    loop {
        let mut total_read = 0usize;

        loop {
            let (result, read, ..) =
                decoder.decode_to_string(&slice[total_read..], &mut buf_string, is_empty);

            total_read += read;

            match result {
                encoding_rs::CoderResult::InputEmpty => {
                    debug_assert_eq!(slice.len(), total_read);
                    break;
                }
                encoding_rs::CoderResult::OutputFull => {
                    debug_assert!(slice.len() > total_read);
                    buf_string.reserve(buf.len())
                }
            }
        }

        if is_empty {
            debug_assert_eq!(reader.read(&mut buf)?, 0);
            break;
        }

        let read = reader.read(&mut buf)?;
        slice = &buf[..read];
        is_empty = read == 0;
    }
    Ok(buf_string)
}

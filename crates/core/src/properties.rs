// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Properties files as a token source
//!
//! Supports the `key=value` format: `=`, `:` or whitespace separators,
//! `#`/`!` comments, backslash line continuations and escapes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Key/value mapping used for token substitution
pub type Properties = BTreeMap<String, String>;

/// Errors that can occur while loading a properties file
#[derive(Debug, Error)]
pub enum PropertiesError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed \\uXXXX escape on line {line}")]
    InvalidEscape { line: usize },
}

/// Parse properties text
pub fn parse_properties(content: &str) -> Result<Properties, PropertiesError> {
    let mut props = Properties::new();
    let mut logical = String::new();
    let mut start_line = 0;
    let mut continuing = false;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim_start();
        if !continuing {
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            start_line = idx + 1;
        }

        let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
        if trailing % 2 == 1 {
            logical.push_str(&line[..line.len() - 1]);
            continuing = true;
            continue;
        }

        logical.push_str(line);
        continuing = false;
        let (key, value) = split_entry(&logical, start_line)?;
        props.insert(key, value);
        logical.clear();
    }

    // Continuation on the last line of the file
    if continuing {
        let (key, value) = split_entry(&logical, start_line)?;
        props.insert(key, value);
    }

    Ok(props)
}

/// Load a properties file from disk
///
/// Content is read as UTF-8, falling back to ISO-8859-1 for files that are
/// not valid UTF-8.
pub fn load_properties(path: &Path) -> Result<Properties, PropertiesError> {
    let bytes = std::fs::read(path).map_err(|source| PropertiesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_properties(&decode(bytes))
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Load the optional properties file for a run
///
/// A file that cannot be loaded is logged and treated as empty so a missing
/// token source never aborts a batch.
pub fn load_or_empty(path: Option<&Path>) -> Properties {
    let Some(path) = path else {
        return Properties::new();
    };
    match load_properties(path) {
        Ok(props) => {
            info!(path = %path.display(), entries = props.len(), "loaded properties file");
            props
        }
        Err(e) => {
            warn!("could not load properties from {}: {}", path.display(), e);
            Properties::new()
        }
    }
}

fn split_entry(line: &str, line_no: usize) -> Result<(String, String), PropertiesError> {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;
    let mut key_end = chars.len();

    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                break;
            }
            _ => i += 1,
        }
    }

    let mut j = key_end;
    while j < chars.len() && chars[j].is_whitespace() {
        j += 1;
    }
    if j < chars.len() && (chars[j] == '=' || chars[j] == ':') {
        j += 1;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
    }

    let key: String = chars[..key_end].iter().collect();
    let value: String = chars[j..].iter().collect();
    Ok((unescape(&key, line_no)?, unescape(&value, line_no)?))
}

fn unescape(s: &str, line_no: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = (hex.len() == 4)
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32)
                    .ok_or(PropertiesError::InvalidEscape { line: line_no })?;
                out.push(decoded);
            }
            // Any other escaped character stands for itself
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "properties_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host definition JSON parsing
//!
//! The document is read as a generic JSON value and then normalized into the
//! [`Hosts`] model. Parameters may be written either as a list of
//! `{ "name": ..., "value": ... }` objects or as a `{ "NAME": "value" }` map.

use crate::model::{Defaults, Host, Hosts, Parameter};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during host file parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// Parse a host definition document
///
/// Blank input, `null` and a document without `hosts` all produce an empty
/// collection; deciding whether that is acceptable is up to the caller.
pub fn parse_hosts(content: &str) -> Result<Hosts, ParseError> {
    if content.trim().is_empty() {
        return Ok(Hosts::default());
    }

    let mut root = match serde_json::from_str::<Value>(content)? {
        Value::Null => return Ok(Hosts::default()),
        Value::Object(map) => map,
        other => {
            return Err(ParseError::InvalidFormat(format!(
                "root must be an object, found {}",
                kind(&other)
            )))
        }
    };

    let hosts = match root.remove("hosts") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| parse_host(i, entry))
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(ParseError::InvalidFormat(format!(
                "hosts must be an array, found {}",
                kind(&other)
            )))
        }
    };

    let defaults = match root.remove("defaults") {
        None | Some(Value::Null) => Defaults::default(),
        Some(Value::Object(mut table)) => Defaults {
            parameters: normalize_parameters(table.remove("parameters"), "defaults.parameters")?,
        },
        Some(other) => {
            return Err(ParseError::InvalidFormat(format!(
                "defaults must be an object, found {}",
                kind(&other)
            )))
        }
    };

    Ok(Hosts { defaults, hosts })
}

fn parse_host(index: usize, value: Value) -> Result<Host, ParseError> {
    let mut table = match value {
        Value::Object(table) => table,
        other => {
            return Err(ParseError::InvalidFormat(format!(
                "hosts[{}] must be an object, found {}",
                index,
                kind(&other)
            )))
        }
    };

    // shift_remove keeps the remaining attributes in document order
    let name = scalar_text(table.shift_remove("name"), &format!("hosts[{}].name", index))?;
    let parameters = normalize_parameters(
        table.shift_remove("parameters"),
        &format!("hosts[{}].parameters", index),
    )?;

    Ok(Host {
        name,
        parameters,
        attributes: table,
    })
}

/// Normalize any accepted parameter shape into an ordered parameter list
///
/// Accepted shapes:
/// - absent or `null`: no parameters
/// - `[{"name": "ENV", "value": "prod"}, ...]`
/// - `{"ENV": "prod", ...}` (document order is kept)
///
/// Missing or `null` names and values become empty strings so that
/// validation can report them against the offending parameter.
pub fn normalize_parameters(
    value: Option<Value>,
    context: &str,
) -> Result<Vec<Parameter>, ParseError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| parameter_from_object(entry, &format!("{}[{}]", context, i)))
            .collect(),
        Some(Value::Object(map)) => map
            .into_iter()
            .map(|(name, value)| -> Result<Parameter, ParseError> {
                let value = scalar_text(Some(value), &format!("{}.{}", context, name))?;
                Ok(Parameter { name, value })
            })
            .collect(),
        Some(other) => Err(ParseError::InvalidFormat(format!(
            "{} must be a list or a map, found {}",
            context,
            kind(&other)
        ))),
    }
}

fn parameter_from_object(value: Value, context: &str) -> Result<Parameter, ParseError> {
    let mut table = match value {
        Value::Object(table) => table,
        other => {
            return Err(ParseError::InvalidFormat(format!(
                "{} must be an object, found {}",
                context,
                kind(&other)
            )))
        }
    };
    Ok(Parameter {
        name: scalar_text(table.remove("name"), &format!("{}.name", context))?,
        value: scalar_text(table.remove("value"), &format!("{}.value", context))?,
    })
}

fn scalar_text(value: Option<Value>, context: &str) -> Result<String, ParseError> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(ParseError::InvalidFormat(format!(
            "{} must be a string, found {}",
            context,
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

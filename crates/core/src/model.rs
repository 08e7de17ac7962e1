// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host definition model

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// A name/value pair attached to a host or to the collection defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name='{}' value='{}'", self.name, self.value)
    }
}

/// One managed machine or resource
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Host {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Any other attributes of the host object, in document order
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Host {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, value));
        self
    }

    /// Value of the first host parameter called `name`
    pub fn parameter_value(&self, name: &str) -> Option<&str> {
        find_value(&self.parameters, name)
    }
}

/// Collection-wide settings applied to every host in a file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Defaults {
    pub parameters: Vec<Parameter>,
}

/// All hosts loaded from a single input file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hosts {
    pub defaults: Defaults,
    pub hosts: Vec<Host>,
}

impl Hosts {
    pub fn new(hosts: Vec<Host>) -> Self {
        Self {
            defaults: Defaults::default(),
            hosts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Host> {
        self.hosts.iter()
    }

    /// Value of the first default parameter called `name`
    pub fn parameter_value(&self, name: &str) -> Option<&str> {
        find_value(&self.defaults.parameters, name)
    }

    pub fn add_default_parameter(&mut self, parameter: Parameter) {
        self.defaults.parameters.push(parameter);
    }
}

impl<'a> IntoIterator for &'a Hosts {
    type Item = &'a Host;
    type IntoIter = std::slice::Iter<'a, Host>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}

fn find_value<'a>(parameters: &'a [Parameter], name: &str) -> Option<&'a str> {
    parameters
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.value.as_str())
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

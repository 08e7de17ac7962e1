// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural validation for loaded hosts.
//!
//! Validation is fail-fast: the first missing attribute is reported and
//! nothing else is checked.

use crate::model::{Host, Hosts, Parameter};
use thiserror::Error;

/// A required attribute is missing or empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("host is missing its 'name' attribute")]
    HostName,
    #[error("host '{host}' parameter is missing its 'name' attribute: {parameter}")]
    ParameterName { host: String, parameter: Parameter },
    #[error("host '{host}' parameter is missing its 'value' attribute: {parameter}")]
    ParameterValue { host: String, parameter: Parameter },
}

impl ValidationError {
    /// Name of the attribute that is missing
    pub fn attribute(&self) -> &'static str {
        match self {
            ValidationError::HostName | ValidationError::ParameterName { .. } => "name",
            ValidationError::ParameterValue { .. } => "value",
        }
    }

    /// The offending parameter, when the error is about one
    pub fn parameter(&self) -> Option<&Parameter> {
        match self {
            ValidationError::HostName => None,
            ValidationError::ParameterName { parameter, .. }
            | ValidationError::ParameterValue { parameter, .. } => Some(parameter),
        }
    }
}

/// Check that `host` and each of its parameters carry their required attributes
pub fn check_host_attributes(host: &Host) -> Result<(), ValidationError> {
    if host.name.is_empty() {
        return Err(ValidationError::HostName);
    }
    for p in &host.parameters {
        if p.name.is_empty() {
            return Err(ValidationError::ParameterName {
                host: host.name.clone(),
                parameter: p.clone(),
            });
        }
        if p.value.is_empty() {
            return Err(ValidationError::ParameterValue {
                host: host.name.clone(),
                parameter: p.clone(),
            });
        }
    }
    Ok(())
}

/// Check every host in the collection, stopping at the first failure
pub fn validate_hosts(hosts: &Hosts) -> Result<(), ValidationError> {
    hosts.iter().try_for_each(check_host_attributes)
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

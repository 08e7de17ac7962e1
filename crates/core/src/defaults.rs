// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collection-wide default parameters

use crate::model::{Hosts, Parameter};

/// Default parameter every loaded collection can rely on
pub const RESERVED: &str = "RESERVED";

/// Value given to [`RESERVED`] when a file does not declare it
pub const RESERVED_DEFAULT: &str = "false";

/// Ensure `hosts` declares a `RESERVED` default parameter
///
/// A non-empty value already present in the file is kept as-is. A declared
/// `RESERVED` without a value (missing, `null` or `""`) is filled in place.
pub fn with_reserved_default(mut hosts: Hosts) -> Hosts {
    match hosts
        .defaults
        .parameters
        .iter_mut()
        .find(|p| p.name == RESERVED)
    {
        Some(declared) if declared.value.is_empty() => {
            declared.value = RESERVED_DEFAULT.to_string();
        }
        Some(_) => {}
        None => hosts.add_default_parameter(Parameter::new(RESERVED, RESERVED_DEFAULT)),
    }
    hosts
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;

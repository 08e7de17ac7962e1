// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hostdef-core: loading of JSON host definition files
//!
//! ```text
//! properties → substitute ${tokens} → parse/normalize → RESERVED default → validate → action
//! ```

mod action;
mod defaults;
mod loader;
mod model;
mod parser;
mod properties;
mod template;
mod validator;

#[cfg(test)]
mod test_support;

pub use action::{ActionError, HostAction};
pub use defaults::{with_reserved_default, RESERVED, RESERVED_DEFAULT};
pub use loader::{
    load_hosts, load_hosts_file, BatchRunner, ContentError, LoadError, LoaderConfig, RunSummary,
};
pub use model::{Defaults, Host, Hosts, Parameter};
pub use parser::{normalize_parameters, parse_hosts, ParseError};
pub use properties::{load_or_empty, load_properties, parse_properties, Properties, PropertiesError};
pub use template::substitute;
pub use validator::{check_host_attributes, validate_hosts, ValidationError};

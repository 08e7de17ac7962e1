// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actions run against each loaded host file

use crate::model::Hosts;
use std::fmt;
use std::path::Path;

/// An operation performed once per successfully loaded file
///
/// Implemented for closures so callers can pass a plain function:
///
/// ```ignore
/// runner.run(&mut |path: &Path, hosts: &Hosts| {
///     println!("{}: {} host(s)", path.display(), hosts.len());
///     Ok(())
/// })?;
/// ```
pub trait HostAction {
    fn perform(&mut self, path: &Path, hosts: &Hosts) -> Result<(), ActionError>;
}

impl<F> HostAction for F
where
    F: FnMut(&Path, &Hosts) -> Result<(), ActionError>,
{
    fn perform(&mut self, path: &Path, hosts: &Hosts) -> Result<(), ActionError> {
        self(path, hosts)
    }
}

/// Failure reported by a [`HostAction`]
#[derive(Debug)]
pub struct ActionError {
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Set the underlying error that caused the action to fail
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch loader: turns host definition files into validated [`Hosts`].
//!
//! ```text
//! file → substitute tokens → parse → non-empty check → RESERVED default → validate → action
//! ```
//!
//! Files are handled one at a time, in the order given. A failure stops the
//! run; actions already performed for earlier files are not undone.

use crate::action::{ActionError, HostAction};
use crate::defaults::with_reserved_default;
use crate::model::Hosts;
use crate::parser::{parse_hosts, ParseError};
use crate::properties::{load_or_empty, Properties};
use crate::template::substitute;
use crate::validator::{validate_hosts, ValidationError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading host files
#[derive(Debug, Error)]
pub enum LoadError {
    /// No input files were supplied
    #[error("no files provided")]
    NoFiles,

    #[error("file {} does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed or wrongly shaped JSON
    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("no hosts loaded from {}", .path.display())]
    Empty { path: PathBuf },

    /// A host or parameter is missing a required attribute
    #[error("invalid host in {}: {source}", .path.display())]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("action failed for {}: {source}", .path.display())]
    Action {
        path: PathBuf,
        #[source]
        source: ActionError,
    },
}

impl LoadError {
    /// The input file the error relates to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            LoadError::NoFiles => None,
            LoadError::FileNotFound { path }
            | LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Empty { path }
            | LoadError::Validation { path, .. }
            | LoadError::Action { path, .. } => Some(path),
        }
    }
}

/// Inputs for a batch run
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Host definition files, processed in order
    pub files: Vec<PathBuf>,
    /// Optional properties file whose entries become `${key}` tokens
    pub properties: Option<PathBuf>,
}

impl LoaderConfig {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            properties: None,
        }
    }

    pub fn with_properties(mut self, path: impl Into<PathBuf>) -> Self {
        self.properties = Some(path.into());
        self
    }
}

/// Counts for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub hosts: usize,
}

/// Runs an action over every file in a [`LoaderConfig`]
#[derive(Debug, Clone)]
pub struct BatchRunner {
    config: LoaderConfig,
}

impl BatchRunner {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load each file and hand the result to `action`
    ///
    /// Every path is checked for existence before the first file is read.
    pub fn run<A: HostAction + ?Sized>(&self, action: &mut A) -> Result<RunSummary, LoadError> {
        if self.config.files.is_empty() {
            return Err(LoadError::NoFiles);
        }

        let props = load_or_empty(self.config.properties.as_deref());

        if let Some(missing) = self.config.files.iter().find(|p| !p.exists()) {
            return Err(LoadError::FileNotFound {
                path: absolute(missing),
            });
        }

        let mut summary = RunSummary::default();
        for path in &self.config.files {
            let hosts = load_hosts_file(path, &props)?;
            action
                .perform(path, &hosts)
                .map_err(|source| LoadError::Action {
                    path: path.clone(),
                    source,
                })?;
            summary.files += 1;
            summary.hosts += hosts.len();
        }

        info!(files = summary.files, hosts = summary.hosts, "batch complete");
        Ok(summary)
    }
}

/// Read, substitute, parse and validate a single host file
pub fn load_hosts_file(path: &Path, props: &Properties) -> Result<Hosts, LoadError> {
    info!(path = %absolute(path).display(), "processing host file");

    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(raw = %raw, "raw file");

    let json = substitute(&raw, props);
    debug!(substituted = %json, "substituted file");

    load_hosts(&json).map_err(|e| e.at(path))
}

/// Parse and validate already substituted host definition text
pub fn load_hosts(content: &str) -> Result<Hosts, ContentError> {
    let hosts = parse_hosts(content).map_err(ContentError::Parse)?;
    if hosts.is_empty() {
        return Err(ContentError::Empty);
    }
    let hosts = with_reserved_default(hosts);
    validate_hosts(&hosts).map_err(ContentError::Validation)?;
    Ok(hosts)
}

/// Failure in host definition text, before a file path is attached
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Parse(ParseError),
    #[error("no hosts defined")]
    Empty,
    #[error(transparent)]
    Validation(ValidationError),
}

impl ContentError {
    fn at(self, path: &Path) -> LoadError {
        let path = path.to_path_buf();
        match self {
            ContentError::Parse(source) => LoadError::Parse { path, source },
            ContentError::Empty => LoadError::Empty { path },
            ContentError::Validation(source) => LoadError::Validation { path, source },
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

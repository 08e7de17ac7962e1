// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with suggestions.

use hostdef_core::LoadError;
use std::fmt;

/// Error with recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct HostdefError {
    /// What went wrong
    pub message: String,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl HostdefError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for HostdefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                write!(f, "\n  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HostdefError {}

impl From<LoadError> for HostdefError {
    fn from(err: LoadError) -> Self {
        let base = HostdefError::new(err.to_string());
        match err {
            LoadError::NoFiles => {
                base.with_suggestion("Pass one or more host files: hostdef check hosts.json")
            }
            LoadError::FileNotFound { .. } => {
                base.with_suggestion("Check the path; no file was processed")
            }
            LoadError::Io { .. } => base.with_suggestion("Check the file permissions"),
            LoadError::Parse { .. } => base
                .with_suggestion("Expected {\"hosts\": [{\"name\": ..., \"parameters\": [...]}]}")
                .with_suggestion("Run with RUST_LOG=debug to see the substituted text"),
            LoadError::Empty { .. } => {
                base.with_suggestion("Add at least one entry to the \"hosts\" array")
            }
            LoadError::Validation { .. } => base.with_suggestion(
                "Every host needs a name; every parameter needs a name and a value",
            ),
            LoadError::Action { .. } => base,
        }
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod show;

use clap::Args;
use hostdef_core::LoaderConfig;
use std::path::PathBuf;

/// Inputs shared by every command that loads host files
#[derive(Args)]
pub struct FileArgs {
    /// Host definition files to process, in order
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Properties file whose key/value pairs can be used as ${key} tokens
    #[arg(long, value_name = "PATH")]
    pub properties: Option<PathBuf>,
}

impl FileArgs {
    pub fn into_config(self) -> LoaderConfig {
        LoaderConfig {
            files: self.files,
            properties: self.properties,
        }
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hostdef show <files>...` - Print the hosts loaded from each file

use super::FileArgs;
use crate::error::HostdefError;
use crate::output::{render, OutputFormat};
use anyhow::Result;
use clap::Args;
use hostdef_core::{ActionError, BatchRunner, Hosts};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub files: FileArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct LoadedFile<'a> {
    file: &'a Path,
    #[serde(flatten)]
    hosts: &'a Hosts,
}

impl fmt::Display for LoadedFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File: {}", self.file.display())?;

        if !self.hosts.defaults.parameters.is_empty() {
            write!(f, "\n  Defaults:")?;
            for p in &self.hosts.defaults.parameters {
                write!(f, "\n    {}: {}", p.name, p.value)?;
            }
        }

        for host in self.hosts {
            write!(f, "\n  Host: {}", host.name)?;
            for (key, value) in &host.attributes {
                match value {
                    Value::String(s) => write!(f, "\n    {}: {}", key, s)?,
                    other => write!(f, "\n    {}: {}", key, other)?,
                }
            }
            if !host.parameters.is_empty() {
                write!(f, "\n    Parameters:")?;
                for p in &host.parameters {
                    write!(f, "\n      {}: {}", p.name, p.value)?;
                }
            }
        }
        Ok(())
    }
}

pub fn show(args: ShowArgs) -> Result<()> {
    let format = args.format;
    let runner = BatchRunner::new(args.files.into_config());

    runner
        .run(&mut |path: &Path, hosts: &Hosts| -> Result<(), ActionError> {
            let loaded = LoadedFile { file: path, hosts };
            let text = render(&loaded, format).map_err(|e| {
                ActionError::new(format!("could not render {}", path.display())).with_source(e)
            })?;
            println!("{}", text);
            Ok(())
        })
        .map_err(HostdefError::from)?;

    Ok(())
}

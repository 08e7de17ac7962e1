// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hostdef check <files>...` - Load and validate host files

use super::FileArgs;
use crate::error::HostdefError;
use anyhow::Result;
use clap::Args;
use hostdef_core::{ActionError, BatchRunner, Hosts};
use std::path::Path;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub files: FileArgs,
}

pub fn check(args: CheckArgs) -> Result<()> {
    let runner = BatchRunner::new(args.files.into_config());

    let summary = runner
        .run(&mut |path: &Path, hosts: &Hosts| -> Result<(), ActionError> {
            println!("ok {}: {} host(s)", path.display(), hosts.len());
            Ok(())
        })
        .map_err(HostdefError::from)?;

    println!(
        "checked {} file(s), {} host(s)",
        summary.files, summary.hosts
    );
    Ok(())
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const WEB_HOSTS: &str = r#"{
  "hosts": [
    {
      "name": "web1",
      "hostgroup": "frontend",
      "parameters": [{ "name": "ENV", "value": "prod" }]
    },
    { "name": "web2" }
  ]
}"#;

/// A temporary directory holding host files for one test.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root and return its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// `hostdef` command running inside the project directory.
    pub fn hostdef(&self) -> Command {
        let mut cmd = Command::cargo_bin("hostdef").expect("hostdef binary not built");
        cmd.current_dir(self.path()).env("RUST_LOG", "warn");
        cmd
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for `hostdef check`

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{Project, WEB_HOSTS};
use predicates::prelude::*;

#[test]
fn check_reports_each_file() {
    let project = Project::empty();
    project.file("a.json", WEB_HOSTS);
    project.file("b.json", r#"{"hosts":[{"name":"db1"}]}"#);

    project
        .hostdef()
        .args(["check", "a.json", "b.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok a.json: 2 host(s)"))
        .stdout(predicate::str::contains("ok b.json: 1 host(s)"))
        .stdout(predicate::str::contains("checked 2 file(s), 3 host(s)"));
}

#[test]
fn check_requires_files() {
    let project = Project::empty();

    project
        .hostdef()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FILES"));
}

#[test]
fn check_missing_file_processes_nothing() {
    let project = Project::empty();
    project.file("a.json", WEB_HOSTS);

    project
        .hostdef()
        .args(["check", "a.json", "missing.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ok a.json").not())
        .stderr(predicate::str::contains("missing.json does not exist"));
}

#[test]
fn check_substitutes_properties() {
    let project = Project::empty();
    project.file("env.properties", "host=web9\nenv=prod\n");
    project.file(
        "hosts.json",
        r#"{"hosts":[{"name":"${host}","parameters":[{"name":"ENV","value":"${env}"}]}]}"#,
    );

    project
        .hostdef()
        .args(["check", "hosts.json", "--properties", "env.properties"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok hosts.json: 1 host(s)"));
}

#[test]
fn check_missing_properties_file_is_a_warning() {
    let project = Project::empty();
    project.file("hosts.json", WEB_HOSTS);

    project
        .hostdef()
        .args(["check", "hosts.json", "--properties", "nope.properties"])
        .assert()
        .success()
        .stderr(predicate::str::contains("could not load properties"));
}

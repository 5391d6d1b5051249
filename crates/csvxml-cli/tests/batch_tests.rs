// Dweve CSVXML - Declarative CSV/XML Mapping
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tests for directory batch conversion

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

const CONFIG: &str = r#"{
    "elementName": "row",
    "baseElement": "rows",
    "data": [
        {"type": "element", "elementName": "id"},
        {"type": "element", "path": "meta", "elementName": "value"}
    ]
}"#;

fn csvxml_cmd() -> Command {
    Command::cargo_bin("csvxml").expect("Failed to find csvxml binary")
}

/// Directory with config.json and `count` CSV files.
fn create_batch_dir(count: usize) -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("config.json"), CONFIG).expect("Failed to write config");
    for i in 0..count {
        let content = format!("{},v{}\n{},w{}\n", i, i, i + 100, i);
        fs::write(dir.path().join(format!("data{}.csv", i)), content)
            .expect("Failed to write test file");
    }
    dir
}

#[test]
fn test_batch_converts_every_file() {
    let dir = create_batch_dir(12);

    csvxml_cmd()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch Operation:"))
        .stdout(predicate::str::contains("convert"));

    for i in 0..12 {
        let xml = fs::read_to_string(dir.path().join(format!("data{}.xml", i))).unwrap();
        assert!(xml.contains(&format!("<id>{}</id>", i)));
        assert!(xml.contains(&format!("<value>w{}</value>", i)));
    }
}

#[test]
fn test_batch_defaults_to_current_dir() {
    let dir = create_batch_dir(2);

    csvxml_cmd()
        .current_dir(dir.path())
        .arg("batch")
        .assert()
        .success();

    assert!(dir.path().join("data0.xml").exists());
    assert!(dir.path().join("data1.xml").exists());
}

#[test]
fn test_batch_xml_inputs_become_csv() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.json"), CONFIG).unwrap();
    fs::write(
        dir.path().join("in.xml"),
        "<rows><row><id>7</id><meta><value>x</value></meta></row></rows>",
    )
    .unwrap();

    csvxml_cmd()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("in.csv")).unwrap(), "7,x\n");
}

#[test]
fn test_batch_serial_mode() {
    let dir = create_batch_dir(3);

    csvxml_cmd()
        .args(["batch", "--serial", "--progress"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[3/3]"));
}

#[test]
fn test_batch_reports_failures_and_continues() {
    let dir = create_batch_dir(3);
    fs::write(dir.path().join("broken.csv"), "only-one-column\n").unwrap();
    fs::write(dir.path().join("broken.xml"), "<rows><row>").unwrap();

    csvxml_cmd()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conversion failures:"))
        .stderr(predicate::str::contains("broken.csv"))
        .stderr(predicate::str::contains("2 of 5 files failed to convert"));

    for i in 0..3 {
        assert!(dir.path().join(format!("data{}.xml", i)).exists());
    }
}

#[test]
fn test_batch_missing_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.csv"), "1,2\n").unwrap();

    csvxml_cmd()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.json"));
}

#[test]
fn test_batch_empty_directory_succeeds() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.json"), CONFIG).unwrap();

    csvxml_cmd().arg("batch").arg(dir.path()).assert().success();
}

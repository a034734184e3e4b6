// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("msh-lite"))
}

const SAMPLE: &str = r#"$MeshFormat
2.2 0 8
$EndMeshFormat
$PhysicalNames
1
2 1 "Inlet"
$EndPhysicalNames
$Nodes
3
1 0.0 0.0 0.0
2 1.0 0.0 0.0
3 0.0 1.0 0.0
$EndNodes
$Elements
2
1 2 2 1 1 1 2 3
2 2 2 1 1 1 3 2
$EndElements
"#;

const OLD_VERSION: &str = "$MeshFormat\n2.1 0 8\n$EndMeshFormat\n\
                           $Nodes\n0\n$EndNodes\n$Elements\n0\n$EndElements\n";

#[test]
fn summary_reports_counts() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("sample.msh");
    std::fs::write(&path, SAMPLE).expect("write sample");

    cli_cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ASCII"))
        .stdout(predicate::str::contains("Nodes"))
        .stdout(predicate::str::contains("Triangle3"))
        .stdout(predicate::str::contains("Inlet"));
}

#[test]
fn json_output_contains_tables() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("sample.msh");
    std::fs::write(&path, SAMPLE).expect("write sample");

    cli_cmd()
        .args([path.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version_major\": 2"))
        .stdout(predicate::str::contains("\"nodes\""))
        .stdout(predicate::str::contains("\"Triangle3\""));
}

#[test]
fn reads_stdin_with_dash() {
    cli_cmd()
        .arg("-")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes"));
}

#[test]
fn truncated_file_fails_with_diagnostic() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("truncated.msh");
    std::fs::write(&path, "$MeshFormat\n2.2 0 8\n$EndMeshFormat\n").expect("write sample");

    cli_cmd()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("$Nodes"));
}

#[test]
fn old_version_warns_unless_strict() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("old.msh");
    std::fs::write(&path, OLD_VERSION).expect("write sample");

    cli_cmd()
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning"));

    cli_cmd()
        .args([path.to_str().unwrap(), "--strict-version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2.1"));
}

//! End-to-end coverage of the CLI surface spec.md §6 describes: stdout
//! mode, the usage error, open-failure reporting, and (on unix, where a
//! symlink can flip `argv[0]`'s last byte) the in-place rewrite ritual.

use std::fs;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn stdout_mode_prints_formatted_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.fx");
    fs::write(&path, "a=b+c\n").unwrap();

    Command::cargo_bin("tidyfmt")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout("a = b + c\n");
}

#[test]
fn stdout_mode_concatenates_multiple_files_in_order() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.fx");
    let b = dir.path().join("b.fx");
    fs::write(&a, "x=1\n").unwrap();
    fs::write(&b, "y=2\n").unwrap();

    Command::cargo_bin("tidyfmt")
        .unwrap()
        .args([&a, &b])
        .assert()
        .success()
        .stdout("x = 1\ny = 2\n");
}

#[test]
fn no_files_prints_usage_and_exits_nonzero() {
    Command::cargo_bin("tidyfmt")
        .unwrap()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("usage"));
}

#[test]
fn missing_file_reports_error_and_stops() {
    Command::cargo_bin("tidyfmt")
        .unwrap()
        .arg("/no/such/file.fx")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("/no/such/file.fx"));
}

#[test]
fn stdout_mode_leaves_the_source_file_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.fx");
    fs::write(&path, "a=1\n").unwrap();

    Command::cargo_bin("tidyfmt").unwrap().arg(&path).assert().success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a=1\n");
}

#[cfg(unix)]
fn in_place_binary(dir: &std::path::Path) -> std::path::PathBuf {
    let real = assert_cmd::cargo::cargo_bin("tidyfmt");
    let link = dir.join("tidyfmti");
    std::os::unix::fs::symlink(&real, &link).unwrap();
    link
}

#[cfg(unix)]
#[test]
fn in_place_mode_rewrites_a_file_that_needs_formatting() {
    let bindir = tempdir().unwrap();
    let link = in_place_binary(bindir.path());

    let workdir = tempdir().unwrap();
    let path = workdir.path().join("a.fx");
    fs::write(&path, "a=b+c\n").unwrap();

    std::process::Command::new(&link)
        .arg(&path)
        .output()
        .expect("tidyfmti should run");

    assert_eq!(fs::read_to_string(&path).unwrap(), "a = b + c\n");
}

#[cfg(unix)]
#[test]
fn in_place_mode_leaves_a_canonical_file_byte_identical() {
    let bindir = tempdir().unwrap();
    let link = in_place_binary(bindir.path());

    let workdir = tempdir().unwrap();
    let path = workdir.path().join("a.fx");
    fs::write(&path, "a = b + c\n").unwrap();

    std::process::Command::new(&link)
        .arg(&path)
        .output()
        .expect("tidyfmti should run");

    assert_eq!(fs::read_to_string(&path).unwrap(), "a = b + c\n");
}

#[cfg(unix)]
#[test]
fn in_place_mode_produces_no_stdout() {
    let bindir = tempdir().unwrap();
    let link = in_place_binary(bindir.path());

    let workdir = tempdir().unwrap();
    let path = workdir.path().join("a.fx");
    fs::write(&path, "a=1\n").unwrap();

    let output = std::process::Command::new(&link).arg(&path).output().unwrap();
    assert!(output.stdout.is_empty());
}

#[test]
fn formats_a_long_call_across_multiple_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.fx");
    let mut f = fs::File::create(&path).unwrap();
    writeln!(
        f,
        "foo(aaaaaaaa, bbbbbbbb, cccccccc, dddddddd, eeeeeeee, ffffffff, gggggggg, hhhhhhhh)"
    )
    .unwrap();
    drop(f);

    let assert = Command::cargo_bin("tidyfmt").unwrap().arg(&path).assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(out.lines().count() > 1);
    assert!(out.lines().all(|l| l.chars().count() <= 80));
}

// SPDX-License-Identifier: CC0-1.0

//! Runs the `sha256sum` binary end to end.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
const HELLO: &str = "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03";

fn sha256sum() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sha256sum"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(cmd: &mut Command, input: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn sha256sum");
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String { String::from_utf8(output.stdout.clone()).unwrap() }

fn stderr(output: &Output) -> String { String::from_utf8(output.stderr.clone()).unwrap() }

#[test]
fn hashes_stdin_without_arguments() {
    let output = run_with_stdin(&mut sha256sum(), b"abc");
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}  -\n", ABC));
}

#[test]
fn hashes_empty_stdin() {
    let output = run_with_stdin(&mut sha256sum(), b"");
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}  -\n", EMPTY));
}

#[test]
fn dash_argument_reads_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, b"hello\n").unwrap();

    let output = run_with_stdin(sha256sum().arg(&path).arg("-"), b"abc");
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}  {}\n{}  -\n", HELLO, path.display(), ABC));
}

#[test]
fn hashes_files_in_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty");
    let abc = dir.path().join("abc");
    fs::write(&empty, b"").unwrap();
    fs::write(&abc, b"abc").unwrap();

    let output = sha256sum().arg(&abc).arg(&empty).arg(&abc).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!(
            "{}  {}\n{}  {}\n{}  {}\n",
            ABC,
            abc.display(),
            EMPTY,
            empty.display(),
            ABC,
            abc.display()
        )
    );
    assert!(stderr(&output).is_empty());
}

#[test]
fn large_file_matches_library() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("large");
    let data: Vec<u8> = (0..200_003u32).map(|i| (i * 7) as u8).collect();
    fs::write(&path, &data).unwrap();

    let output = sha256sum().arg(&path).output().unwrap();
    assert!(output.status.success());
    let expected = hashes::sha256::Hash::hash(&data);
    assert_eq!(stdout(&output), format!("{}  {}\n", expected, path.display()));
}

#[test]
fn missing_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let abc = dir.path().join("abc");
    let missing = dir.path().join("does-not-exist");
    fs::write(&abc, b"abc").unwrap();

    let output = sha256sum().arg(&missing).arg(&abc).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), format!("{}  {}\n", ABC, abc.display()));
    let err = stderr(&output);
    assert!(err.contains("failed to open"), "stderr: {}", err);
    assert!(err.contains("does-not-exist"), "stderr: {}", err);
}

#[test]
fn unreadable_source_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let abc = dir.path().join("abc");
    fs::write(&abc, b"abc").unwrap();

    // A directory opens fine but cannot be read.
    let output = sha256sum().arg(dir.path()).arg(&abc).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), format!("{}  {}\n", ABC, abc.display()));
    assert!(!stderr(&output).is_empty());
}

#[test]
fn debug_flag_logs_to_stderr() {
    let output = run_with_stdin(sha256sum().arg("--debug"), b"abc");
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}  -\n", ABC));
    assert!(stderr(&output).contains("using stdin"));
}

#[test]
fn quiet_by_default() {
    let output = run_with_stdin(&mut sha256sum(), b"abc");
    assert!(stderr(&output).is_empty());
}

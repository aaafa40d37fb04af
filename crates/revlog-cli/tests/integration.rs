//! Integration tests driving the compiled `revlog` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn revlog(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_revlog"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run revlog binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// The new commit's full identifier is the last line of `commit` output.
fn committed_id(output: &Output) -> String {
    stdout(output)
        .lines()
        .last()
        .expect("commit printed nothing")
        .trim()
        .to_string()
}

#[test]
fn init_creates_layout() {
    let temp = TempDir::new().unwrap();

    let output = revlog(temp.path(), &["init"]);
    assert!(output.status.success(), "init failed: {}", stderr(&output));

    let root = temp.path().join(".revlog");
    for name in ["stage", "contents.log", "commits.log", "commits.idx"] {
        assert!(root.join(name).is_file(), "missing {name}");
    }
}

#[test]
fn init_twice_fails() {
    let temp = TempDir::new().unwrap();

    assert!(revlog(temp.path(), &["init"]).status.success());
    let output = revlog(temp.path(), &["init"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already initialized"));
}

#[test]
fn commands_require_an_initialized_repository() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();

    for args in [&["add", "a.txt"][..], &["commit", "msg"], &["log"]] {
        let output = revlog(temp.path(), args);
        assert!(!output.status.success(), "{args:?} should fail");
        assert!(stderr(&output).contains("not initialized"));
    }
}

#[test]
fn add_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    assert!(revlog(temp.path(), &["init"]).status.success());

    let output = revlog(temp.path(), &["add", "ghost.txt"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("path not found"));
}

#[test]
fn add_twice_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    assert!(revlog(temp.path(), &["init"]).status.success());

    assert!(revlog(temp.path(), &["add", "a.txt"]).status.success());
    let output = revlog(temp.path(), &["add", "a.txt"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already staged"));
}

#[test]
fn commit_with_empty_stage_fails() {
    let temp = TempDir::new().unwrap();
    assert!(revlog(temp.path(), &["init"]).status.success());

    let output = revlog(temp.path(), &["commit", "nothing to record"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("nothing staged"));
}

#[test]
fn end_to_end_scenario() {
    let temp = TempDir::new().unwrap();
    let a_txt = temp.path().join("a.txt");

    // init; stage a.txt containing "hello"; commit "first".
    assert!(revlog(temp.path(), &["init"]).status.success());
    fs::write(&a_txt, "hello").unwrap();
    assert!(revlog(temp.path(), &["add", "a.txt"]).status.success());

    let output = revlog(temp.path(), &["commit", "first"]);
    assert!(output.status.success(), "commit failed: {}", stderr(&output));
    let id = committed_id(&output);
    assert_eq!(id.len(), 64, "expected a full identifier, got {id:?}");

    // log shows one entry with the message "first".
    let output = revlog(temp.path(), &["log"]);
    assert!(output.status.success());
    let log = stdout(&output);
    assert!(log.contains(&id));
    assert!(log.contains("first"));

    // checkout recreates a.txt containing exactly "hello".
    fs::write(&a_txt, "scribbled over").unwrap();
    let output = revlog(temp.path(), &["checkout", &id]);
    assert!(output.status.success(), "checkout failed: {}", stderr(&output));
    assert_eq!(fs::read_to_string(&a_txt).unwrap(), "hello");

    // show prints the committed content without touching the work tree.
    fs::write(&a_txt, "changed again").unwrap();
    let output = revlog(temp.path(), &["show", &id]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("hello"));
    assert_eq!(fs::read_to_string(&a_txt).unwrap(), "changed again");
}

#[test]
fn checkout_accepts_identifier_prefix() {
    let temp = TempDir::new().unwrap();
    assert!(revlog(temp.path(), &["init"]).status.success());
    fs::write(temp.path().join("a.txt"), "v1").unwrap();
    assert!(revlog(temp.path(), &["add", "a.txt"]).status.success());
    let id = committed_id(&revlog(temp.path(), &["commit", "first"]));

    fs::write(temp.path().join("a.txt"), "v2").unwrap();
    let output = revlog(temp.path(), &["checkout", &id[..8]]);
    assert!(output.status.success(), "prefix checkout failed: {}", stderr(&output));
    assert_eq!(fs::read_to_string(temp.path().join("a.txt")).unwrap(), "v1");
}

#[test]
fn checkout_unknown_id_fails() {
    let temp = TempDir::new().unwrap();
    assert!(revlog(temp.path(), &["init"]).status.success());

    let output = revlog(temp.path(), &["checkout", "deadbeef"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not found"));
}

#[test]
fn log_json_output_is_parseable() {
    let temp = TempDir::new().unwrap();
    assert!(revlog(temp.path(), &["init"]).status.success());
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    assert!(revlog(temp.path(), &["add", "a.txt"]).status.success());
    assert!(revlog(temp.path(), &["commit", "first"]).status.success());

    let output = revlog(temp.path(), &["--format", "json", "log"]);
    assert!(output.status.success());

    let commits: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(commits.as_array().unwrap().len(), 1);
    assert_eq!(commits[0]["message"], "first");
    assert_eq!(commits[0]["files"][0]["path"], "a.txt");
}

#[test]
fn fsck_rebuilds_a_deleted_index() {
    let temp = TempDir::new().unwrap();
    assert!(revlog(temp.path(), &["init"]).status.success());
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    assert!(revlog(temp.path(), &["add", "a.txt"]).status.success());
    let id = committed_id(&revlog(temp.path(), &["commit", "first"]));

    fs::write(temp.path().join(".revlog/commits.idx"), "").unwrap();

    let output = revlog(temp.path(), &["fsck"]);
    assert!(output.status.success(), "fsck failed: {}", stderr(&output));
    assert!(stdout(&output).contains("1 commit"));

    fs::write(temp.path().join("a.txt"), "dirty").unwrap();
    assert!(revlog(temp.path(), &["checkout", &id]).status.success());
    assert_eq!(
        fs::read_to_string(temp.path().join("a.txt")).unwrap(),
        "hello"
    );
}

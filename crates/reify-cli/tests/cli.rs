//! Integration tests: run the reify binary and check exit codes, output and files.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn reify(root: &Path, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_reify"))
        .arg("--root")
        .arg(root)
        .env_remove("REIFY_INDEXES_DIR")
        .env_remove("REIFY_OBJECTS_DIR")
        .env_remove("REIFY_GENERATED_DIR")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The binary may exit before reading stdin
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn write(path: &Path, content: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn example_root() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    write(
        &root.path().join("indexes/1.0.json"),
        br#"{"objects": {"a/b.txt": {"hash": "abcd1234"}, "c.txt": {}}}"#,
    );
    write(&root.path().join("objects/ab/abcd1234"), b"blob bytes");
    root
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn test_help() {
    let out = Command::new(env!("CARGO_BIN_EXE_reify"))
        .arg("--help")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(stdout(&out).contains("--root"));
}

#[test]
fn test_example_run() {
    let root = example_root();
    let out = reify(root.path(), "1.0\n");

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("  - 1.0"));
    assert!(text.contains("Grabbing assets for version: 1.0"));
    assert!(text.contains("Successfully created file at a/b.txt"));
    assert!(text.contains("Process finished with 1 file(s) successfully copied!"));
    assert_eq!(
        fs::read(root.path().join("generated/1.0/a/b.txt")).unwrap(),
        b"blob bytes"
    );
    assert!(!root.path().join("generated/1.0/c.txt").exists());
}

#[test]
fn test_invalid_version_reprompts() {
    let root = example_root();
    let out = reify(root.path(), "9.9\n1.0\n");

    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("The version \"9.9\" was not found"));
    assert_eq!(text.matches("Please select which version").count(), 2);
    assert!(root.path().join("generated/1.0/a/b.txt").exists());
}

#[test]
fn test_missing_blob_is_reported() {
    let root = example_root();
    write(
        &root.path().join("indexes/1.0.json"),
        br#"{"objects": {"a/b.txt": {"hash": "abcd1234"}, "gone.txt": {"hash": "ffee"}}}"#,
    );
    let out = reify(root.path(), "1.0\n");

    assert!(out.status.success());
    assert!(stderr(&out).contains("Could not find file at"));
    assert!(stdout(&out).contains("Process finished with 1 file(s) successfully copied!"));
}

#[test]
fn test_missing_indexes_dir_fails() {
    let root = tempfile::tempdir().unwrap();
    let out = reify(root.path(), "");

    assert!(!out.status.success());
    #[cfg(unix)]
    assert_eq!(out.status.code(), Some(255));
    assert!(stderr(&out).contains("No \"indexes\" directory was found"));
    assert!(!root.path().join("generated").exists());
}

#[test]
fn test_no_manifests_exits_zero() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("indexes")).unwrap();
    write(&root.path().join("indexes/readme.txt"), b"not a manifest");

    let out = reify(root.path(), "");
    assert!(out.status.success());
    assert!(stdout(&out).contains("No index files found"));
}

#[test]
fn test_missing_objects_key_fails() {
    let root = example_root();
    write(&root.path().join("indexes/1.0.json"), br#"{"files": {}}"#);

    let out = reify(root.path(), "1.0\n");
    assert!(!out.status.success());
    assert!(stderr(&out).contains("has no \"objects\" key"));
}

#[test]
fn test_missing_object_store_fails() {
    let root = example_root();
    fs::remove_dir_all(root.path().join("objects")).unwrap();

    let out = reify(root.path(), "1.0\n");
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Invalid objects location"));
    assert!(!root.path().join("generated/1.0/a/b.txt").exists());
}

#[test]
fn test_input_ends_before_selection() {
    let root = example_root();
    let out = reify(root.path(), "2.0\n");

    assert!(!out.status.success());
    assert!(!root.path().join("generated").exists());
}

#[test]
fn test_config_file_renames_dirs() {
    let root = tempfile::tempdir().unwrap();
    write(
        &root.path().join("reify.toml"),
        b"[layout]\nindexes = \"manifests\"\ngenerated = \"out\"\n",
    );
    write(
        &root.path().join("manifests/2.0.json"),
        br#"{"objects": {"x.bin": {"hash": "0011"}}}"#,
    );
    write(&root.path().join("objects/00/0011"), b"x");

    let out = reify(root.path(), "2.0\n");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(root.path().join("out/2.0/x.bin").exists());
}

#[test]
fn test_non_hex_hash_does_not_abort_run() {
    let root = example_root();
    write(
        &root.path().join("indexes/1.0.json"),
        br#"{"objects": {"a/b.txt": {"hash": "abcd1234"}, "odd.txt": {"hash": "zz99"}}}"#,
    );

    let out = reify(root.path(), "1.0\n");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("Process finished with 1 file(s) successfully copied!"));
    assert!(stderr(&out).contains("Could not find file at"));
    assert!(root.path().join("generated/1.0/a/b.txt").exists());
}

#[test]
fn test_numeric_hash_is_accepted() {
    let root = example_root();
    write(
        &root.path().join("indexes/1.0.json"),
        br#"{"objects": {"a/b.txt": {"hash": "abcd1234"}, "n.txt": {"hash": 1234}}}"#,
    );
    write(&root.path().join("objects/12/1234"), b"numeric");

    let out = reify(root.path(), "1.0\n");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("Process finished with 2 file(s) successfully copied!"));
    assert_eq!(
        fs::read(root.path().join("generated/1.0/n.txt")).unwrap(),
        b"numeric"
    );
}

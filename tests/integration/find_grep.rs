//! `find` and `grep` through the binary.

use super::test_utils::{run_in, stderr, stdout, workspace};

#[test]
fn test_grep_prints_matching_lines_and_count() {
    let ws = workspace();
    let output = run_in(ws.path(), &["grep", "foo", "notes.txt"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "foo on line two\nand foo again\nfounded count 2\n"
    );
}

#[test]
fn test_grep_searches_latin1_file() {
    let ws = workspace();
    std::fs::write(ws.path().join("l1.txt"), b"caf\xe9 foo\nbar\nfoo end\n").unwrap();

    let output = run_in(ws.path(), &["grep", "foo", "l1.txt"]);
    assert!(output.status.success(), "stderr was: {}", stderr(&output));
    assert_eq!(output.stdout, b"caf\xe9 foo\nfoo end\nfounded count 2\n");
}

#[test]
fn test_grep_missing_file_fails() {
    let ws = workspace();
    let output = run_in(ws.path(), &["grep", "foo", "absent.txt"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("grep error: open absent.txt:"));
}

#[test]
fn test_find_directory_lists_children() {
    let ws = workspace();
    let output = run_in(ws.path(), &["find", "docs"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "docs\n  -> d guides/\n  -> - intro.md\n");
}

#[test]
fn test_find_file_prints_path() {
    let ws = workspace();
    let output = run_in(ws.path(), &["find", "./docs/intro.md"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "docs/intro.md\n");
}

#[test]
fn test_find_missing_fails_with_not_found() {
    let ws = workspace();
    let output = run_in(ws.path(), &["find", "nothing-here"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("find error: not found file or directory: nothing-here"));
}

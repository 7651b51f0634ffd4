//! Dispatch and validation through the binary: exit codes and stderr messages.

use super::test_utils::{run_in, stderr, stdout, workspace};
use tempfile::TempDir;

#[test]
fn test_echo_joins_words() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["echo", "hello", "there", "-n"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "hello there -n\n");
}

#[test]
fn test_missing_command_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &[]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("parse error: not found args"),
        "stderr was: {}",
        stderr(&output)
    );
}

#[test]
fn test_unknown_command_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["rm", "notes.txt"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid command: rm"));
}

#[test]
fn test_arity_errors_print_no_output() {
    let ws = workspace();
    for args in [
        vec!["echo"],
        vec!["cat"],
        vec!["ls", "docs"],
        vec!["find"],
        vec!["grep", "foo"],
        vec!["grep", "foo", "notes.txt", "extra"],
    ] {
        let output = run_in(ws.path(), &args);
        assert!(!output.status.success(), "{:?} should fail", args);
        assert!(stdout(&output).is_empty(), "{:?} printed output", args);
        assert!(
            stderr(&output).contains(&format!("invalid params length for {}", args[0])),
            "{:?} stderr was: {}",
            args,
            stderr(&output)
        );
    }
}

#[test]
fn test_ls_lists_tree_with_types() {
    let ws = workspace();
    let output = run_in(ws.path(), &["ls"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("name: . type: directory\n"));
    assert!(text.contains("name: docs type: directory\n"));
    assert!(text.contains("name: notes.txt type: file\n"));
}

#[test]
fn test_ls_is_stable_across_invocations() {
    let ws = workspace();
    let first = stdout(&run_in(ws.path(), &["ls"]));
    let second = stdout(&run_in(ws.path(), &["ls"]));
    assert_eq!(first, second);
}

#[test]
fn test_verbose_logs_go_to_stderr_only() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["--verbose", "echo", "quiet", "stdout"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "quiet stdout\n");
    assert!(stderr(&output).contains("Shutils CLI starting"));
}

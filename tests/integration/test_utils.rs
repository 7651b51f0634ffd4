//! Helpers for running the built binary inside an isolated working directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run shutils in `dir` with config discovery pointed away from the real home.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    run_with_env(dir, args, &[])
}

pub fn run_with_env(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let home = dir.join(".home");
    fs::create_dir_all(&home).unwrap();

    let bin = env!("CARGO_BIN_EXE_shutils");
    let mut command = Command::new(bin);
    command
        .current_dir(dir)
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("SHUTILS_LOG")
        .args(args);
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Workspace with a handful of files and one nested directory.
pub fn workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("docs").join("guides")).unwrap();
    fs::write(root.join("docs").join("intro.md"), "intro").unwrap();
    fs::write(
        root.join("notes.txt"),
        "first line\nfoo on line two\nthird\nfourth\nand foo again\nlast\n",
    )
    .unwrap();
    fs::write(root.join("a.txt"), "alpha").unwrap();
    fs::write(root.join("b.txt"), "beta").unwrap();
    temp_dir
}

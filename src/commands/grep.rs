//! grep: literal, case-sensitive substring search over the lines of one file.
//!
//! Lines are scanned as raw bytes, so files in any encoding are searched and echoed
//! unchanged.

use crate::error::ToolError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub fn grep(pattern: &str, path: &Path) -> Result<Vec<u8>, ToolError> {
    let file = File::open(path).map_err(|source| ToolError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    grep_reader(pattern, BufReader::new(file))
}

/// Matching lines in file order followed by `founded count <n>`.
pub fn grep_reader<R: BufRead>(pattern: &str, reader: R) -> Result<Vec<u8>, ToolError> {
    let needle = pattern.as_bytes();
    let mut output = Vec::new();
    let mut count = 0usize;
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if contains(&line, needle) {
            count += 1;
            output.extend_from_slice(&line);
            output.push(b'\n');
        }
    }
    output.extend_from_slice(format!("founded count {}\n", count).as_bytes());
    Ok(output)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

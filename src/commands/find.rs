//! find: locate a root-relative path and describe it.

use crate::error::ToolError;
use crate::tree::walker::{EntryKind, Walker};
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Strip a leading `./` and trailing slashes so `./src/` and `src` name the same entry.
pub fn normalize_target(name: &str) -> PathBuf {
    let trimmed = name.strip_prefix("./").unwrap_or(name).trim_end_matches('/');
    if trimmed.is_empty() {
        // "/" stays absolute and will never match; "./" is the root.
        return PathBuf::from(if name.starts_with('/') { name } else { "." });
    }
    PathBuf::from(trimmed)
}

/// A matching file prints its path. A matching directory prints its path and then its
/// immediate children, `d name/` for directories and `- name` for everything else.
pub fn find(walker: &Walker, name: &str) -> Result<Vec<u8>, ToolError> {
    let target = normalize_target(name);
    let entry = walker
        .find(&target)?
        .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
    debug!(path = %entry.path.display(), kind = entry.kind.label(), "Found entry");

    let mut output = format!("{}\n", entry.path.display());
    if entry.kind == EntryKind::File {
        return Ok(output.into_bytes());
    }

    let mut children = fs::read_dir(&entry.full_path)?.collect::<Result<Vec<_>, _>>()?;
    children.sort_by_key(|child| child.file_name());
    for child in children {
        let child_name = child.file_name();
        let child_name = child_name.to_string_lossy();
        if child.file_type()?.is_dir() {
            let _ = writeln!(output, "  -> d {}/", child_name);
        } else {
            let _ = writeln!(output, "  -> - {}", child_name);
        }
    }
    Ok(output.into_bytes())
}

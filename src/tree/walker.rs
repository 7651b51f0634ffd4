//! Filesystem walker for traversing the working directory

use crate::error::ToolError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Classification of a visited entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }
}

/// A visited entry, with its path relative to the walk root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// `.` for the root itself, otherwise a root-relative path such as `src/main.rs`
    pub path: PathBuf,
    /// Location on disk (root joined with `path`)
    pub full_path: PathBuf,
    pub kind: EntryKind,
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false; links are reported as files)
    pub follow_symlinks: bool,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Visit every entry under the root, root included, in file-name order.
    ///
    /// Stops at the first error.
    pub fn entries(&self) -> impl Iterator<Item = Result<Entry, ToolError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .map(move |entry| {
                let entry = entry?;
                let relative = entry
                    .path()
                    .strip_prefix(&self.root)
                    .unwrap_or_else(|_| entry.path());
                let path = if relative.as_os_str().is_empty() {
                    PathBuf::from(".")
                } else {
                    relative.to_path_buf()
                };
                let kind = if entry.file_type().is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                Ok(Entry {
                    path,
                    full_path: entry.path().to_path_buf(),
                    kind,
                })
            })
    }

    /// Walk the filesystem and collect all entries
    pub fn walk(&self) -> Result<Vec<Entry>, ToolError> {
        self.entries().collect()
    }

    /// First entry whose relative path equals `target`, or `None` after a full walk.
    pub fn find(&self, target: &Path) -> Result<Option<Entry>, ToolError> {
        for entry in self.entries() {
            let entry = entry?;
            if entry.path == target {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }
}

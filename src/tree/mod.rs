//! Filesystem traversal

pub mod walker;

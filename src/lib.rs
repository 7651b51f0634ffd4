//! Shutils: minimal file-inspection utilities
//!
//! `echo`, `cat`, `ls`, `find` and `grep` for the current working directory. Arguments
//! are validated into a typed command before anything touches the filesystem; `cat`
//! reads its files concurrently under a deadline.

pub mod aggregate;
pub mod cli;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;

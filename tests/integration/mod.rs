//! Integration tests for the shutils binary

mod command_dispatch;
mod find_grep;
mod test_utils;

//! ls: list every entry under the root with its type.

use crate::error::ToolError;
use crate::tree::walker::Walker;
use std::fmt::Write;

pub fn ls(walker: &Walker) -> Result<Vec<u8>, ToolError> {
    let mut output = String::new();
    for entry in walker.walk()? {
        let _ = writeln!(
            output,
            "name: {} type: {}",
            entry.path.display(),
            entry.kind.label()
        );
    }
    Ok(output.into_bytes())
}

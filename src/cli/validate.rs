//! Argument validation: raw command words to a typed [`CommandContext`].
//!
//! Pure function of its input. Arity is checked here and nowhere else.

use crate::command::{CommandContext, CommandName, CommandParams};
use crate::error::ToolError;
use std::path::PathBuf;

/// Validate the arguments that follow the program name.
pub fn validate<S: AsRef<str>>(args: &[S]) -> Result<CommandContext, ToolError> {
    let (first, rest) = args.split_first().ok_or(ToolError::MissingCommand)?;
    let word = first.as_ref();
    let name: CommandName = word
        .parse()
        .map_err(|_| ToolError::UnknownCommand(word.to_string()))?;
    let rest: Vec<&str> = rest.iter().map(|arg| arg.as_ref()).collect();
    let arity = || ToolError::InvalidArity { command: name };

    let params = match name {
        CommandName::Echo => {
            if rest.is_empty() {
                return Err(arity());
            }
            CommandParams::Echo {
                text: rest.join(" "),
            }
        }
        CommandName::Cat => {
            if rest.is_empty() {
                return Err(arity());
            }
            CommandParams::Cat {
                paths: rest.iter().map(|path| PathBuf::from(*path)).collect(),
            }
        }
        CommandName::Ls => {
            if !rest.is_empty() {
                return Err(arity());
            }
            CommandParams::Ls
        }
        CommandName::Find => match rest.as_slice() {
            [target] => CommandParams::Find {
                name: target.to_string(),
            },
            _ => return Err(arity()),
        },
        CommandName::Grep => match rest.as_slice() {
            [pattern, path] => CommandParams::Grep {
                pattern: pattern.to_string(),
                path: PathBuf::from(*path),
            },
            _ => return Err(arity()),
        },
    };

    Ok(CommandContext::new(params))
}

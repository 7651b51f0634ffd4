//! CLI domain: parse, validate, route and output only.
//! A single route table dispatches validated commands to their handlers.

mod output;
mod parse;
mod route;
pub mod validate;

pub use output::{map_error, PARSE_STAGE};
pub use parse::Cli;
pub use route::RunContext;
pub use validate::validate;

//! Command handlers. Each takes already-validated parameters and returns the exact
//! bytes to print on stdout.

mod cat;
mod echo;
mod find;
mod grep;
mod ls;

pub use cat::{cat, render_aggregation, TIMEOUT_NOTICE};
pub use echo::echo;
pub use find::{find, normalize_target};
pub use grep::{grep, grep_reader};
pub use ls::ls;

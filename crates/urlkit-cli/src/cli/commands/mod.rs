//! CLI command handlers, one per file.

mod check;
mod completions;
mod parse;
mod rewrite;

pub use check::run_check;
pub use completions::run_completions;
pub use parse::run_parse;
pub use rewrite::run_rewrite;

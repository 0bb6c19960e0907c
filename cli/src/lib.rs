pub mod commands;
pub mod context;
pub mod repl;
pub mod ticker;

pub use context::CliContext;
pub use repl::stdin_lines;

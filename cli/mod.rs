pub mod cli_args;
pub mod formatter;
pub mod runner;

pub use cli_args::{BitOperation, CliArgs, Command, IntervalOperation};
pub use formatter::OutputFormatter;
pub use runner::{Report, Runner};

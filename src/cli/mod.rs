//! Interactive shell and command handlers: the presentation layer
//! over the booking state. Validation of free-form input and
//! confirmation of destructive actions live here, not in the core.

pub mod commands;
pub mod context;
pub mod demo;
pub mod forms;
pub mod output;
pub mod shell;
pub mod table;

pub use context::{CliError, CliMode, CommandError, ShellContext};
pub use shell::run_cli;

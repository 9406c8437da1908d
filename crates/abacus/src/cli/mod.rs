//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! abacus binary.

mod ask;
mod commands;
mod serve;

pub use ask::{handle_ask_command, post_generate};
pub use commands::{Cli, Commands};
pub use serve::handle_serve_command;

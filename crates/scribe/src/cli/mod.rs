//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scribe binary.

mod commands;
mod driver;
mod health;
mod run;
mod show;
mod terminal;

pub use commands::{Cli, Commands};
pub use health::check_health;
pub use run::{RunOptions, run_script};
pub use show::show_script;

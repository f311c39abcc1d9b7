//! Templet Application
//!
//! Headless command-line shell over the template layout engine.

mod cli;
mod commands;

pub use cli::{Cli, Command};
pub use commands::{describe, read_template, run, write_template};

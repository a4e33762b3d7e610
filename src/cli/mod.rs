//! CLI for the product API
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - serve: Load configuration and run the HTTP server
//! - routes: Print the route table

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, routes, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};

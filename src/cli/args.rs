//! CLI argument definitions using clap
//!
//! Commands:
//! - product-api init --config <path>
//! - product-api serve --config <path> [--port <port>]
//! - product-api routes

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Product API - a JSON:API service for a product catalogue
#[derive(Parser, Debug)]
#[command(name = "product-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./product-api.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./product-api.json")]
        config: PathBuf,

        /// Override the port from the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the route table and exit
    Routes,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! CLI argument definitions using clap
//!
//! Commands:
//! - pessoa-api serve [--config <path>] [--host <h>] [--port <p>] [--log-level <lvl>]
//! - pessoa-api openapi

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pessoa API - in-memory person CRUD over HTTP
#[derive(Parser, Debug)]
#[command(name = "pessoa-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Print the OpenAPI document and exit
    Openapi,
}

/// Overrides applied on top of the config file
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Path to JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

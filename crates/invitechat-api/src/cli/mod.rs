//! CLI command definitions for the `invitechat` binary.
//!
//! Uses clap derive macros for argument parsing. `serve` runs the widget
//! backend; `history` inspects a stored session from the terminal.

pub mod history;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use invitechat_types::config::StorageBackend;

/// Chat assistant backend for the wedding-invitation widget.
#[derive(Parser)]
#[command(name = "invitechat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Write logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "invitechat.toml")]
    pub config: PathBuf,

    /// Override the message store backend (memory or sqlite).
    #[arg(long, global = true)]
    pub storage: Option<StorageBackend>,

    /// Override the SQLite database URL.
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (chat API + widget SPA).
    Serve {
        /// Port to listen on.
        #[arg(long, short, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to.
        #[arg(long)]
        host: Option<String>,

        /// Directory with the built SPA.
        #[arg(long)]
        web_dir: Option<String>,

        /// OpenRouter API key.
        #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Print the stored messages of a chat session.
    History {
        /// Session identifier as sent by the widget.
        session_id: String,
    },
}

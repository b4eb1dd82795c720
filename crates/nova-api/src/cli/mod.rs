//! CLI command definitions for the `nova` binary.
//!
//! Uses clap derive macros for argument parsing. Every subcommand except
//! `serve` and `completions` runs one operation against the data directory
//! and exits.

pub mod conversation;
pub mod journal;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with Nova, your moody little AI companion.
#[derive(Parser)]
#[command(name = "nova", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding memory.json, chat_history.json, journal.json and config.toml.
    #[arg(long, global = true, env = "NOVA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Interface to bind (defaults to `server.host` in config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to `server.port` in config.toml).
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Send one message and print the reply.
    Ask {
        /// Message text. Multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Show the rolling chat history.
    History,

    /// Empty the rolling chat history (the journal is kept).
    #[command(name = "clear-history")]
    ClearHistory,

    /// Show the journal.
    Journal {
        /// Only show the last N entries.
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Summarize the most recent journal entries.
    Summarize,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

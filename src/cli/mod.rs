//! CLI argument parsing for wayfind
//!
//! Uses clap derive. Global flags: --format, --quiet, --verbose,
//! --log-level, --log-json.

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_edge, parse_format};
use wayfind_core::format::OutputFormat;

/// Wayfind - shortest paths over named graphs and text mazes
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "WAYFIND_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve a text maze
    Solve {
        /// Maze file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Find the shortest path between two vertices
    Path {
        /// Edge as "FROM,TO" (repeatable)
        #[arg(long, short, action = clap::ArgAction::Append, value_parser = parse_edge)]
        edge: Vec<(String, String)>,

        /// Treat edges as directed (default: undirected)
        #[arg(long)]
        directed: bool,

        /// Start vertex key
        from: String,

        /// Destination vertex key
        to: String,
    },
}

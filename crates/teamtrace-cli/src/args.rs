use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::LogLevel;

#[derive(Parser)]
#[command(name = "teamtrace")]
#[command(about = "Rebuild Claude Code agent team sessions into one timeline", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Claude Code project log root [default: ~/.claude/projects]
    #[arg(long, global = true)]
    pub log_root: Option<String>,

    /// Path to config.toml [default: <workspace>/config.toml]
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a session into a self-contained HTML viewer
    View {
        /// Session ID (the JSONL file name without extension)
        session_id: String,

        /// Viewer template containing the session data placeholder
        #[arg(long)]
        template: Option<PathBuf>,

        /// Output HTML path [default: <output_dir>/<session_id>.html]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Don't open the result in a browser
        #[arg(long)]
        no_open: bool,
    },

    /// Write the assembled session document as JSON
    Export {
        /// Session ID (the JSONL file name without extension)
        session_id: String,

        /// Output file [default: stdout]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

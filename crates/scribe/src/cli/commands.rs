//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scribe - turn a topic into a first-person video-essay script
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(about = "Turn a topic into a first-person video-essay script", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./scribe.toml and ~/.config/scribe/scribe.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Brainstorm, outline and draft a script
    Run {
        /// Essay topic; prompted for when omitted
        #[arg(long)]
        topic: Option<String>,

        /// 1-based theme number; prompted for when omitted
        #[arg(long)]
        theme: Option<usize>,

        /// Number of outline sections (1-12); prompted for when omitted
        #[arg(long)]
        sections: Option<u32>,

        /// Draft without asking for confirmation
        #[arg(short, long)]
        yes: bool,

        /// Use the built-in offline model instead of a real one
        #[arg(long)]
        offline: bool,

        /// Directory to write the script into
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Check that the configured model answers
    Health {
        /// Check the offline model instead
        #[arg(long)]
        offline: bool,
    },

    /// Print a saved script
    Show {
        /// Path of the script file
        path: PathBuf,
    },
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "datapack-docs")]
#[command(about = "Search, deep-link and try out the datapack language documentation", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./datapack-docs.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log at DEBUG level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show documentation entries matching a query
    Search {
        /// Terms to match; quote phrases, e.g. '"run once"'
        #[arg(default_value = "")]
        query: String,
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// List every entry with its anchor id
    Outline,
    /// Resolve a deep link such as 'https://site/docs#player-onevent'
    Locate { location: String },
    /// Compile a program with the configured external compiler
    Compile {
        /// Main source file
        main: PathBuf,
        #[arg(long)]
        namespace: String,
        /// Header source file
        #[arg(long)]
        header: Option<PathBuf>,
    },
    /// Serve the documentation tools over MCP (stdio)
    Serve,
}

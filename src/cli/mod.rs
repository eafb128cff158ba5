pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "newsfeed")]
#[command(about = "Fetch and list stories from a news search API", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a fully-formed query URL and list its stories
    Fetch {
        /// Query URL
        url: String,
    },
    /// Build a search query from the configuration and list its stories
    Search {
        /// Restrict results to one section
        #[arg(short, long)]
        section: Option<String>,

        /// Free-text search terms
        #[arg(short, long)]
        query: Option<String>,

        /// Number of stories to request
        #[arg(long)]
        page_size: Option<u32>,

        /// API key, overriding the configured one
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Parse a saved API response (file or stdin) without network access
    Parse {
        /// Path to the response body; reads stdin when omitted
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

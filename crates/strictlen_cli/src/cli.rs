//! CLI argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// strictlen - Markdown line-length linter that ignores code, tables and links
#[derive(Parser)]
#[command(name = "strictlen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint files
    Lint {
        /// Files, directories or glob patterns to lint
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[command(flatten)]
        overrides: RuleOverrides,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// List available rules
    Rules {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Command-line overrides for the line-length rule options.
#[derive(Debug, Default, Args)]
pub struct RuleOverrides {
    /// Maximum line length
    #[arg(long, value_name = "N")]
    pub line_length: Option<usize>,

    /// Check lines inside code blocks
    #[arg(long)]
    pub no_ignore_code_blocks: bool,

    /// Check lines inside tables
    #[arg(long)]
    pub no_ignore_tables: bool,

    /// Check lines that end with a link
    #[arg(long)]
    pub no_ignore_links: bool,

    /// Report lines where a link is followed by punctuation
    #[arg(long)]
    pub no_ignore_link_punctuation: bool,
}

//! CLI argument definitions for bowling.

use std::path::PathBuf;

use bowling_core::LookaheadMode;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bowling")]
#[command(about = "Ten-pin bowling scorer", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, env = "BOWLING_CONFIG", default_value = "bowling.toml")]
    pub config: PathBuf,

    /// Reject malformed games instead of scoring them best-effort
    #[arg(long, env = "BOWLING_STRICT")]
    pub strict: bool,

    /// How strike bonuses look ahead (overrides config)
    #[arg(long, value_enum, env = "BOWLING_LOOKAHEAD")]
    pub lookahead: Option<Lookahead>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a sequence of rolls
    Score {
        /// Roll symbols: 0-9, '-' (gutter), 'X' (strike), '/' (spare)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        rolls: Vec<String>,
    },
    /// Score the built-in sample game
    Example,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lookahead {
    Rolls,
    Frames,
}

impl From<Lookahead> for LookaheadMode {
    fn from(value: Lookahead) -> Self {
        match value {
            Lookahead::Rolls => Self::Rolls,
            Lookahead::Frames => Self::Frames,
        }
    }
}

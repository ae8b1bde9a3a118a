//! Command-line interface for wordscramble.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Word Scramble - spell as many words as you can from a root word
#[derive(Parser, Debug)]
#[command(name = "wordscramble")]
#[command(about = "Spell words from the letters of a random root word", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "WORDSCRAMBLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Root word for the first round instead of a random one
        #[arg(long)]
        root: Option<String>,
    },

    /// Score a list of words against one root word and exit
    Check {
        /// Root word to check against (random if omitted)
        #[arg(long)]
        root: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

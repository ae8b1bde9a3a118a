//! Word Scramble application: CLI, configuration, and terminal UI.
//!
//! The rules live in [`wordscramble_core`]; this crate wires them to a
//! config file, a word list, and a ratatui front end.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod check;
mod cli;
mod config;
mod resources;
pub mod tui;

pub use check::{CheckReport, run_check};
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use resources::{load_engine, load_root_words, word_source};

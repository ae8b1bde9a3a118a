//! Word Scramble - terminal word game.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordscramble::{
    Cli, Command, GameConfig, load_engine, load_root_words, run_check, tui,
};
use wordscramble_core::choose_root_word;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { root } => run_play(&config, root),
        Command::Check { root, json, words } => run_check_command(&config, root, json, words),
    }
}

/// Run the terminal UI.
fn run_play(config: &GameConfig, root: Option<String>) -> Result<()> {
    // Resources load before the TUI claims the terminal so failures print normally.
    let root_words = load_root_words(config)?;
    let engine = load_engine(config)?;

    let app = tui::App::new(engine, root_words, root, rand::rng());
    tui::run_tui(app, config.log_file())
}

/// Score words from the command line and print the report.
#[instrument(skip(config, words), fields(count = words.len()))]
fn run_check_command(
    config: &GameConfig,
    root: Option<String>,
    json: bool,
    words: Vec<String>,
) -> Result<()> {
    initialize_stderr_tracing();

    let engine = load_engine(config).inspect_err(|e| error!(error = %e, "Dictionary failed to load"))?;
    let root = match root {
        Some(root) => root,
        None => {
            let root_words =
                load_root_words(config).inspect_err(|e| error!(error = %e, "Word list failed to load"))?;
            choose_root_word(&root_words, &mut rand::rng())
        }
    };

    let report = run_check(&engine, &root, &words);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    info!(score = *report.score(), "Check complete");
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,wordscramble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

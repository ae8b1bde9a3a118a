//! Terminal UI for word scramble.

mod app;
mod input;
mod ui;

pub use app::{Alert, App};
pub use input::{InputAction, map_key};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, instrument};
use wordscramble_core::Dictionary;

/// Runs the game until the player quits.
///
/// Logs go to `log_file` so they do not interfere with the screen.
pub fn run_tui<D: Dictionary, R: Rng>(app: App<D, R>, log_file: &Path) -> Result<()> {
    let log_file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,wordscramble=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Word Scramble TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Draw-and-poll loop. Each key press is fully handled before the next read.
#[instrument(skip_all)]
fn run_app<B, D, R>(terminal: &mut Terminal<B>, mut app: App<D, R>) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    D: Dictionary,
    R: Rng,
{
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_action(map_key(key));
        }

        if app.should_quit() {
            info!(score = *app.session().score(), "Leaving game");
            return Ok(());
        }
    }
}

//! Application state and logic.

use rand::Rng;
use tracing::{debug, info, instrument};
use wordscramble_core::{
    Dictionary, GameSession, ScrambleEngine, SessionEvent, SessionEvents, choose_root_word,
    normalize,
};

use super::input::InputAction;

/// Rejection dialog shown over the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub message: &'static str,
}

/// Main application state.
pub struct App<D, R> {
    engine: ScrambleEngine<D>,
    session: GameSession,
    events: SessionEvents,
    root_words: Vec<String>,
    rng: R,
    input: String,
    alert: Option<Alert>,
    status_message: String,
    should_quit: bool,
}

impl<D, R> App<D, R> {
    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the text currently typed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Gets the open alert, if any.
    pub fn alert(&self) -> Option<Alert> {
        self.alert
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the player asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl<D: Dictionary, R: Rng> App<D, R> {
    /// Creates the app and starts the first round.
    ///
    /// `first_root` fixes the first root word; later rounds draw from
    /// `root_words`.
    #[instrument(skip(engine, root_words, rng), fields(candidates = root_words.len()))]
    pub fn new(
        engine: ScrambleEngine<D>,
        root_words: Vec<String>,
        first_root: Option<String>,
        mut rng: R,
    ) -> Self {
        let root = first_root.unwrap_or_else(|| choose_root_word(&root_words, &mut rng));
        let mut session = GameSession::new(root);
        let events = session.subscribe();
        info!(root_word = %session.root_word(), "App ready");

        Self {
            engine,
            session,
            events,
            root_words,
            rng,
            input: String::new(),
            alert: None,
            status_message: "Type a word and press Enter".to_string(),
            should_quit: false,
        }
    }

    /// Applies one input action.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: InputAction) {
        if self.alert.is_some() {
            match action {
                InputAction::Submit | InputAction::Cancel => {
                    debug!("Alert dismissed");
                    self.alert = None;
                }
                InputAction::Quit => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match action {
            InputAction::Insert(c) => self.input.push(c),
            InputAction::Backspace => {
                self.input.pop();
            }
            InputAction::Submit => self.submit(),
            InputAction::NewRound => self.new_round(),
            InputAction::Cancel | InputAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            InputAction::Ignore => {}
        }

        self.sync_events();
    }

    /// Draws a new root word and resets the round.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        let root = choose_root_word(&self.root_words, &mut self.rng);
        self.input.clear();
        self.session.start_round(root);
    }

    fn submit(&mut self) {
        if normalize(&self.input).is_empty() {
            self.input.clear();
            return;
        }

        let verdict = self.session.submit(&self.engine, &self.input);
        if verdict.is_accepted() {
            self.input.clear();
        }
    }

    /// Applies pending session events to the status line and alert.
    pub fn sync_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: SessionEvent) {
        debug!(?event, "Handling session event");

        match event {
            SessionEvent::RoundStarted { root_word } => {
                self.status_message = format!("New round: {}", root_word);
            }
            SessionEvent::WordAccepted { word, delta, .. } => {
                self.status_message = format!("{} {:+}", word, delta);
            }
            SessionEvent::WordRejected {
                word,
                reason,
                delta,
                ..
            } => {
                self.status_message = format!("{} {:+}", word, delta);
                if let (Some(title), Some(message)) = (reason.title(), reason.message()) {
                    self.alert = Some(Alert { title, message });
                }
            }
        }
    }
}

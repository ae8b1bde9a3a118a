//! Game session state for a single player.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::dictionary::Dictionary;
use crate::engine::ScrambleEngine;
use crate::types::{Verdict, VerdictReason, normalize};

/// Receiving end of a [`GameSession`] subscription.
pub type SessionEvents = mpsc::UnboundedReceiver<SessionEvent>;

/// Change notifications emitted by a [`GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new round started with this root word.
    RoundStarted {
        /// The new root word.
        root_word: String,
    },
    /// A word was accepted.
    WordAccepted {
        /// The accepted word.
        word: String,
        /// Points gained.
        delta: i64,
        /// Score after the change.
        score: i64,
    },
    /// A word was rejected.
    WordRejected {
        /// The rejected candidate.
        word: String,
        /// Why it was rejected.
        reason: VerdictReason,
        /// Points lost.
        delta: i64,
        /// Score after the penalty.
        score: i64,
    },
}

/// Authoritative state of the current round.
///
/// Accepted words are stored most recent first. The score has no floor and
/// may go negative.
#[derive(Debug, Getters)]
pub struct GameSession {
    /// Root word of the round.
    root_word: String,
    /// Accepted words, most recent first.
    accepted_words: Vec<String>,
    /// Running score.
    score: i64,
    #[getter(skip)]
    subscribers: Vec<mpsc::UnboundedSender<SessionEvent>>,
}

impl GameSession {
    /// Creates a session with an empty word list and zero score.
    #[instrument(skip(root_word))]
    pub fn new(root_word: impl Into<String>) -> Self {
        let root_word = normalize(&root_word.into());
        info!(%root_word, "Creating game session");
        Self {
            root_word,
            accepted_words: Vec::new(),
            score: 0,
            subscribers: Vec::new(),
        }
    }

    /// Returns a receiver for every subsequent [`SessionEvent`].
    #[instrument(skip(self))]
    pub fn subscribe(&mut self) -> SessionEvents {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        debug!(subscribers = self.subscribers.len(), "Added session subscriber");
        rx
    }

    /// Starts a new round: sets the root word, clears accepted words, and
    /// resets the score.
    #[instrument(skip(self, root_word))]
    pub fn start_round(&mut self, root_word: impl Into<String>) {
        self.root_word = normalize(&root_word.into());
        self.accepted_words.clear();
        self.score = 0;
        info!(root_word = %self.root_word, "Round started");
        self.emit(SessionEvent::RoundStarted {
            root_word: self.root_word.clone(),
        });
    }

    /// Applies an engine verdict to the round.
    ///
    /// Accepted candidates are prepended to the word list. The delta is added
    /// to the score either way.
    #[instrument(skip(self), fields(root_word = %self.root_word))]
    pub fn apply_verdict(&mut self, verdict: &Verdict) {
        self.score += *verdict.delta();

        let event = if verdict.is_accepted() {
            self.accepted_words.insert(0, verdict.candidate().clone());
            info!(word = %verdict.candidate(), score = self.score, "Word accepted");
            SessionEvent::WordAccepted {
                word: verdict.candidate().clone(),
                delta: *verdict.delta(),
                score: self.score,
            }
        } else {
            debug!(word = %verdict.candidate(), reason = %verdict.reason(), score = self.score, "Word rejected");
            SessionEvent::WordRejected {
                word: verdict.candidate().clone(),
                reason: *verdict.reason(),
                delta: *verdict.delta(),
                score: self.score,
            }
        };

        self.emit(event);
    }

    /// Evaluates a raw submission with `engine` and applies the verdict.
    #[instrument(skip(self, engine))]
    pub fn submit<D: Dictionary>(&mut self, engine: &ScrambleEngine<D>, raw: &str) -> Verdict {
        let verdict = engine.evaluate(raw, &self.root_word, &self.accepted_words);
        self.apply_verdict(&verdict);
        verdict
    }

    fn emit(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

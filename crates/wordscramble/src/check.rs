//! Non-interactive scoring of a word list against one root word.

use derive_getters::Getters;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{info, instrument};
use wordscramble_core::{Dictionary, GameSession, ScrambleEngine, Verdict};

/// Result of checking a batch of words.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct CheckReport {
    /// Root word the words were checked against.
    root_word: String,
    /// One verdict per submitted word, in submission order.
    verdicts: Vec<Verdict>,
    /// Accepted words, most recent first.
    accepted_words: Vec<String>,
    /// Final score.
    score: i64,
}

impl CheckReport {
    /// Formats the report as plain text, one line per word plus the score.
    #[instrument(skip(self))]
    pub fn render_text(&self) -> String {
        let mut out = format!("Root word: {}\n", self.root_word);
        for verdict in &self.verdicts {
            let _ = write!(
                out,
                "{:<12} {:<25} {:+}",
                verdict.candidate(),
                verdict.reason().as_ref(),
                verdict.delta()
            );
            if let (Some(title), Some(message)) =
                (verdict.reason().title(), verdict.reason().message())
            {
                let _ = write!(out, "  {title}. {message}.");
            }
            out.push('\n');
        }
        let _ = writeln!(out, "Score: {}", self.score);
        out
    }
}

/// Submits `words` in order to a fresh round on `root_word`.
///
/// Blank entries are skipped, as the terminal UI does.
#[instrument(skip(engine, words), fields(count = words.len()))]
pub fn run_check<D: Dictionary>(
    engine: &ScrambleEngine<D>,
    root_word: &str,
    words: &[String],
) -> CheckReport {
    let mut session = GameSession::new(root_word);
    let verdicts: Vec<Verdict> = words
        .iter()
        .filter(|word| !word.trim().is_empty())
        .map(|word| session.submit(engine, word))
        .collect();

    info!(score = *session.score(), "Check finished");
    CheckReport {
        root_word: session.root_word().clone(),
        verdicts,
        accepted_words: session.accepted_words().clone(),
        score: *session.score(),
    }
}

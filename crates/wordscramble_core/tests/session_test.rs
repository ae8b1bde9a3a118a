//! Tests for session state transitions and change events.

use wordscramble_core::{
    GameSession, ScrambleEngine, SessionEvent, Verdict, VerdictReason, WordListDictionary,
};

#[test]
fn test_start_round_resets_state() {
    let engine = ScrambleEngine::new(WordListDictionary::from_words("en", ["sow", "worm"]));
    let mut session = GameSession::new("silkworm");
    session.submit(&engine, "sow");
    session.submit(&engine, "worm");
    assert_eq!(*session.score(), 3);

    session.start_round("Agitated");
    assert_eq!(session.root_word(), "agitated");
    assert!(session.accepted_words().is_empty());
    assert_eq!(*session.score(), 0);
}

#[test]
fn test_score_can_go_negative() {
    let mut session = GameSession::new("silkworm");
    for _ in 0..3 {
        session.apply_verdict(&Verdict::new(
            "zzz".to_string(),
            VerdictReason::NotInDictionary,
            -1,
        ));
    }
    assert_eq!(*session.score(), -3);
}

#[test]
fn test_subscriber_sees_events_in_order() {
    let engine = ScrambleEngine::new(WordListDictionary::from_words("en", ["sow"]));
    let mut session = GameSession::new("silkworm");
    let mut rx = session.subscribe();

    session.submit(&engine, "sow");
    session.submit(&engine, "xy");
    session.start_round("agitated");

    assert_eq!(
        rx.try_recv().unwrap(),
        SessionEvent::WordAccepted {
            word: "sow".to_string(),
            delta: 1,
            score: 1,
        }
    );
    assert_eq!(
        rx.try_recv().unwrap(),
        SessionEvent::WordRejected {
            word: "xy".to_string(),
            reason: VerdictReason::TooShort,
            delta: -1,
            score: 0,
        }
    );
    assert_eq!(
        rx.try_recv().unwrap(),
        SessionEvent::RoundStarted {
            root_word: "agitated".to_string(),
        }
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_every_subscriber_receives_events() {
    let mut session = GameSession::new("silkworm");
    let mut first = session.subscribe();
    let mut second = session.subscribe();

    session.start_round("tomatoes");

    assert!(matches!(first.try_recv(), Ok(SessionEvent::RoundStarted { .. })));
    assert!(matches!(second.try_recv(), Ok(SessionEvent::RoundStarted { .. })));
}

//! Tests for the non-interactive check command.

use wordscramble::run_check;
use wordscramble_core::{ScrambleEngine, VerdictReason, WordListDictionary};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_check_silkworm_scenario() {
    let engine = ScrambleEngine::new(WordListDictionary::bundled());
    let report = run_check(
        &engine,
        "silkworm",
        &words(&["sow", "sow", "xy", "silkworms", "silkworm"]),
    );

    let reasons: Vec<VerdictReason> = report.verdicts().iter().map(|v| *v.reason()).collect();
    assert_eq!(
        reasons,
        [
            VerdictReason::Accepted,
            VerdictReason::AlreadyUsed,
            VerdictReason::TooShort,
            VerdictReason::NotConstructibleFromRoot,
            VerdictReason::Accepted,
        ]
    );
    assert_eq!(report.accepted_words(), &["silkworm", "sow"]);
    assert_eq!(*report.score(), 18);
}

#[test]
fn test_check_skips_blank_words() {
    let engine = ScrambleEngine::new(WordListDictionary::bundled());
    let report = run_check(&engine, "silkworm", &words(&["  ", "worm"]));
    assert_eq!(report.verdicts().len(), 1);
    assert_eq!(*report.score(), 2);
}

#[test]
fn test_text_report_lists_each_word() {
    let engine = ScrambleEngine::new(WordListDictionary::bundled());
    let report = run_check(&engine, "silkworm", &words(&["worm", "moss"]));
    let text = report.render_text();

    assert!(text.starts_with("Root word: silkworm\n"));
    assert!(text.contains("worm"));
    assert!(text.contains("+2"));
    assert!(text.contains("NotConstructibleFromRoot"));
    assert!(text.contains("Be more accurate."));
    assert!(text.trim_end().ends_with("Score: 1"));
}

#[test]
fn test_json_report_shape() {
    let engine = ScrambleEngine::new(WordListDictionary::bundled());
    let report = run_check(&engine, "silkworm", &words(&["sow"]));
    let json = serde_json::to_value(&report).expect("Serialize failed");

    assert_eq!(json["root_word"], "silkworm");
    assert_eq!(json["score"], 1);
    assert_eq!(json["verdicts"][0]["reason"], "Accepted");
    assert_eq!(json["accepted_words"][0], "sow");
}

// Integration tests for the wordle-helper application
// These tests verify that all modules work together correctly

use std::io::Cursor;
use wordle_helper::cli::CliInterface;
use wordle_helper::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn results_of(s: &str) -> Vec<Feedback> {
    s.chars().map(Feedback::from_char).collect()
}

#[test]
fn test_end_to_end_session_win() {
    // The assistant recommends a guess and the user reports all-green; the
    // session should complete without panicking.
    let wordbank = words(&["crane", "slate", "trace", "place", "grace"]);

    let reader = Cursor::new("ggggg\n");
    let mut interface = CliInterface::new(reader);

    game_loop(&wordbank, &mut interface).unwrap();
}

#[test]
fn test_end_to_end_session_exit() {
    let wordbank = words(&["crane", "slate", "raise"]);
    let reader = Cursor::new("exit\n");
    let mut interface = CliInterface::new(reader);

    game_loop(&wordbank, &mut interface).unwrap();
}

#[test]
fn test_end_to_end_session_new_game_then_win() {
    let wordbank = words(&["crane", "slate", "raise"]);
    let reader = Cursor::new("next\nggggg\n");
    let mut interface = CliInterface::new(reader);

    game_loop(&wordbank, &mut interface).unwrap();
}

#[test]
fn test_end_to_end_malformed_results_abort() {
    let wordbank = words(&["crane", "slate", "raise"]);
    let reader = Cursor::new("ggg\n");
    let mut interface = CliInterface::new(reader);

    let err = game_loop(&wordbank, &mut interface).unwrap_err();
    assert!(matches!(err, SolverError::InvalidInput(_)));
}

#[test]
fn test_report_and_filter_pipeline() {
    // Guess "crane" when the secret word is "brain": r and a exact, n
    // partial, c and e absent.
    let wordbank = words(&["crane", "brain", "train", "grain", "stain"]);

    let report = MatchReport::from_results("crane", &results_of("_ggy_")).unwrap();
    let candidates = filter_candidates(&wordbank, &report).unwrap();

    assert!(!candidates.contains(&"crane".to_string()));
    assert!(candidates.contains(&"brain".to_string()));
    assert!(candidates.contains(&"train".to_string()));
    assert!(candidates.contains(&"grain".to_string()));
    // "stain" fails the exact 'r' at position 1.
    assert!(!candidates.contains(&"stain".to_string()));
}

#[test]
fn test_progressive_narrowing_keeps_order_and_shrinks() {
    let wordbank = words(&["arose", "prose", "those", "whose", "chose", "close"]);
    let mut candidates = wordbank.clone();

    // 'o', 's', 'e' pinned; 'a' and 'r' ruled out entirely.
    let report = MatchReport::from_results("arose", &results_of("__ggg")).unwrap();
    candidates = filter_candidates(&candidates, &report).unwrap();
    assert_eq!(candidates, words(&["those", "whose", "chose", "close"]));

    // Filtering again with the same report changes nothing.
    let again = filter_candidates(&candidates, &report).unwrap();
    assert_eq!(again, candidates);
}

#[test]
fn test_partial_feedback_requires_letter_elsewhere() {
    // 'a' is in the word but not at position 0; every candidate has 'a'
    // first, so the list empties. A valid terminal state, not an error.
    let wordbank = words(&["apple", "angle", "ankle"]);

    let report = MatchReport::from_results("apple", &results_of("y____")).unwrap();
    let candidates = filter_candidates(&wordbank, &report).unwrap();

    assert!(candidates.is_empty());
}

#[test]
fn test_repeated_letter_feedback_does_not_eliminate_confirmed_letter() {
    // "sassy" with one 's' partial, one exact, and the rest grey: words
    // containing 's' away from the greyed spots must survive.
    let report = MatchReport::from_results("sassy", &results_of("y_g__")).unwrap();

    let wordbank = words(&["desks", "misty", "press"]);
    let candidates = filter_candidates(&wordbank, &report).unwrap();
    // "desks" keeps 's' at position 2, off position 0, and avoids a/y.
    assert!(candidates.contains(&"desks".to_string()));
    // "misty" contains the ruled-out 'y'.
    assert!(!candidates.contains(&"misty".to_string()));
    // "press" has no 's' at position 2.
    assert!(!candidates.contains(&"press".to_string()));
}

#[test]
fn test_recommendation_prefers_common_distinct_letters() {
    let wordbank = words(&["mamma", "crane", "slate"]);
    let report = MatchReport::default();

    // "mamma" has only two distinct letters and should never beat a word
    // covering five reasonably common ones.
    let best = recommend_guess(&wordbank, &report).unwrap();
    assert_ne!(best, "mamma");
}

#[test]
fn test_recommendation_after_filtering_round() {
    let wordbank = words(&["suite", "quote", "olive", "crane"]);

    // 'e' confirmed last, c/r/a/n ruled out.
    let report = MatchReport::from_results("crane", &results_of("____g")).unwrap();
    let candidates = filter_candidates(&wordbank, &report).unwrap();
    assert_eq!(candidates, words(&["suite", "quote", "olive"]));

    let best = recommend_guess(&candidates, &report).unwrap();
    assert!(candidates.contains(best));
}

#[test]
fn test_wordbank_loading_variations() {
    let wordbank1 = load_wordbank_from_str("crane\nslate\nraise");
    let wordbank2 = load_wordbank_from_str("CRANE\nSLATE\nRAISE");
    let wordbank3 = load_wordbank_from_str("  crane  \n  slate  \n  raise  ");

    assert_eq!(wordbank1, wordbank2);
    assert_eq!(wordbank2, wordbank3);
    assert_eq!(wordbank1.len(), 3);
}

#[test]
fn test_custom_wordbank_file_to_game() {
    // Integration test: load a custom word list file, then play to a win.
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let wordbank_path = temp_dir.join("test_helper_wordbank.txt");

    {
        let mut file = File::create(&wordbank_path).unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "grape").unwrap();
        writeln!(file, "lemon").unwrap();
        writeln!(file, "melon").unwrap();
        writeln!(file, "peach").unwrap();
    }

    let wordbank = load_wordbank_from_file(&wordbank_path).unwrap();
    assert_eq!(wordbank.len(), 5);
    assert!(wordbank.contains(&"apple".to_string()));

    let reader = Cursor::new("ggggg\n");
    let mut interface = CliInterface::new(reader);
    game_loop(&wordbank, &mut interface).unwrap();

    std::fs::remove_file(&wordbank_path).unwrap();
}

#[test]
fn test_single_candidate_session_reports_solution() {
    let wordbank = words(&["crane"]);
    let reader = Cursor::new("");
    let mut interface = CliInterface::new(reader);

    // No input needed: one candidate is an immediate solution.
    game_loop(&wordbank, &mut interface).unwrap();
}

#[test]
fn test_session_that_eliminates_everything() {
    // All-grey feedback on words that collectively share letters with every
    // other candidate leads to the no-solution terminal state.
    let wordbank = words(&["crane", "nacre"]);
    let reader = Cursor::new("_____\n");
    let mut interface = CliInterface::new(reader);

    game_loop(&wordbank, &mut interface).unwrap();
}

#[test]
fn test_embedded_wordbank_supports_a_full_round() {
    let wordbank = load_wordbank_from_str(wordbank::EMBEDDED_WORDBANK);
    assert!(wordbank.len() > 500);

    let report = MatchReport::default();
    let first = recommend_guess(&wordbank, &report).unwrap().clone();

    // Simulate grey-only feedback on the first recommendation.
    let results = vec![Feedback::NoMatch; 5];
    let report = MatchReport::from_results(&first, &results).unwrap();
    let narrowed = filter_candidates(&wordbank, &report).unwrap();

    assert!(narrowed.len() < wordbank.len());
    assert!(!narrowed.contains(&first));
}

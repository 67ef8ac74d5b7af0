//! Candidate filtering and letter-frequency scoring.

use crate::debug_log;
use crate::report::{MatchReport, SolverError, WORD_LENGTH};

const ALPHABET_LEN: usize = 26;

fn letter_index(c: char) -> usize {
    (c.to_ascii_lowercase() as u8 - b'a') as usize
}

/// Collapses the exact map into one confirmed letter per position.
///
/// Two different letters claiming the same position means the feedback was
/// contradictory, which is a fatal input error rather than something to
/// resolve silently.
fn exact_letters_by_position(
    report: &MatchReport,
) -> Result<[Option<char>; WORD_LENGTH], SolverError> {
    let mut pinned = [None; WORD_LENGTH];
    for (&letter, positions) in &report.exact {
        for &position in positions {
            match pinned[position] {
                None => pinned[position] = Some(letter),
                Some(existing) if existing == letter => {}
                Some(existing) => {
                    return Err(SolverError::ConflictingExact {
                        position,
                        first: existing,
                        second: letter,
                    });
                }
            }
        }
    }
    Ok(pinned)
}

/// Collapses the partial map into the letters forbidden at each position.
fn forbidden_letters_by_position(report: &MatchReport) -> [Vec<char>; WORD_LENGTH] {
    let mut forbidden: [Vec<char>; WORD_LENGTH] = Default::default();
    for (&letter, positions) in &report.partial {
        for &position in positions {
            forbidden[position].push(letter);
        }
    }
    forbidden
}

fn matches_exact(word: &str, pinned: &[Option<char>; WORD_LENGTH]) -> bool {
    word.chars()
        .zip(pinned.iter())
        .all(|(c, pin)| pin.is_none_or(|letter| letter == c))
}

fn matches_partial(word: &str, forbidden: &[Vec<char>; WORD_LENGTH], report: &MatchReport) -> bool {
    // The word must not place a partial letter where it was already tried...
    for (i, c) in word.chars().enumerate() {
        if forbidden[i].contains(&c) {
            return false;
        }
    }
    // ...and must contain every partial letter somewhere.
    report.partial.keys().all(|&letter| word.contains(letter))
}

fn matches_nonmatch(word: &str, report: &MatchReport) -> bool {
    word.chars().all(|c| !report.nonmatch.contains(&c))
}

/// Keeps only the candidates consistent with the report, preserving order.
///
/// The three filters are simple conjunctions, so their sequencing does not
/// affect the result; each stays independently testable. An empty result is
/// a valid outcome meaning the secret word is outside the dictionary.
pub fn filter_candidates(
    candidates: &[String],
    report: &MatchReport,
) -> Result<Vec<String>, SolverError> {
    let pinned = exact_letters_by_position(report)?;
    let forbidden = forbidden_letters_by_position(report);

    let filtered: Vec<String> = candidates
        .iter()
        .filter(|word| matches_exact(word, &pinned))
        .filter(|word| matches_partial(word, &forbidden, report))
        .filter(|word| matches_nonmatch(word, report))
        .cloned()
        .collect();

    debug_log!(
        "filtered {} candidates down to {}",
        candidates.len(),
        filtered.len()
    );
    Ok(filtered)
}

/// Average occurrences of each letter per candidate word.
///
/// Repeats within a word count toward a letter's total, so this is an
/// average-occurrence score rather than a presence indicator. Letters ruled
/// out by the report score zero. Recomputed fresh each turn.
pub fn letter_scores(candidates: &[String], report: &MatchReport) -> [f64; ALPHABET_LEN] {
    let mut scores = [0.0; ALPHABET_LEN];
    if candidates.is_empty() {
        return scores;
    }

    let mut counts = [0usize; ALPHABET_LEN];
    for word in candidates {
        for c in word.chars() {
            counts[letter_index(c)] += 1;
        }
    }

    let word_count = candidates.len() as f64;
    for (i, &count) in counts.iter().enumerate() {
        let letter = (b'a' + i as u8) as char;
        if !report.nonmatch.contains(&letter) {
            scores[i] = count as f64 / word_count;
        }
    }
    scores
}

/// Sums the scores of a word's distinct letters; duplicates count once.
pub fn score_word(word: &str, scores: &[f64; ALPHABET_LEN]) -> f64 {
    let mut seen = [false; ALPHABET_LEN];
    let mut total = 0.0;
    for c in word.chars() {
        let index = letter_index(c);
        if !seen[index] {
            seen[index] = true;
            total += scores[index];
        }
    }
    total
}

/// Picks the candidate whose distinct letters are collectively most common
/// across the remaining list. Ties go to the earlier candidate; `None` only
/// when the list is empty (the driver checks emptiness before calling).
pub fn recommend_guess<'a>(candidates: &'a [String], report: &MatchReport) -> Option<&'a String> {
    let scores = letter_scores(candidates, report);
    let mut best_score = 0.0;
    let mut best_word = None;
    for word in candidates {
        let score = score_word(word, &scores);
        if best_word.is_none() || score > best_score {
            best_score = score;
            best_word = Some(word);
        }
    }
    best_word
}

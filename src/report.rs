//! Feedback interpretation: turning a result string for a guess into the
//! constraints it implies about the secret word.

use std::collections::{HashMap, HashSet};
use std::fmt;

pub const WORD_LENGTH: usize = 5;

/// Per-position result of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Letter confirmed at this position (green).
    Match,
    /// Letter in the word but not at this position (yellow).
    PartialMatch,
    /// No information tying the letter to the word (grey).
    NoMatch,
}

impl Feedback {
    /// 'g' reads as green and 'y' as yellow; every other character
    /// (canonically '_') reads as grey.
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'g' => Feedback::Match,
            'y' => Feedback::PartialMatch,
            _ => Feedback::NoMatch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Guess or result string failed a length/character precondition.
    InvalidInput(String),
    /// Feedback claimed two different letters exact at the same position.
    ConflictingExact {
        position: usize,
        first: char,
        second: char,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
            SolverError::ConflictingExact {
                position,
                first,
                second,
            } => write!(
                f,
                "conflicting feedback: both '{first}' and '{second}' claimed exact at position {position}"
            ),
        }
    }
}

impl std::error::Error for SolverError {}

/// Everything a single guess's feedback tells us about the secret word.
///
/// `exact` maps a letter to the positions where it is confirmed.
/// `partial` maps a letter known to be in the word to the positions where it
/// is confirmed NOT to be.
/// `nonmatch` holds letters confirmed absent from the word entirely.
///
/// A letter never appears in `nonmatch` while also keying `exact` or
/// `partial`; it may key both `exact` and `partial` at once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub exact: HashMap<char, Vec<usize>>,
    pub partial: HashMap<char, Vec<usize>>,
    pub nonmatch: HashSet<char>,
}

impl MatchReport {
    /// Builds a report from a guessed word and its per-position results.
    ///
    /// Preconditions: `word` is exactly five ASCII letters and `results` has
    /// exactly five entries. Violations return `SolverError::InvalidInput`.
    pub fn from_results(word: &str, results: &[Feedback]) -> Result<Self, SolverError> {
        if word.len() != WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(SolverError::InvalidInput(format!(
                "guess must be {WORD_LENGTH} letters, got {word:?}"
            )));
        }
        if results.len() != WORD_LENGTH {
            return Err(SolverError::InvalidInput(format!(
                "results must have {WORD_LENGTH} entries, got {}",
                results.len()
            )));
        }

        let letters: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
        let mut exact: HashMap<char, Vec<usize>> = HashMap::new();
        let mut partial: HashMap<char, Vec<usize>> = HashMap::new();
        let mut grey_positions = Vec::new();

        for (i, result) in results.iter().enumerate() {
            match result {
                Feedback::Match => exact.entry(letters[i]).or_default().push(i),
                Feedback::PartialMatch => partial.entry(letters[i]).or_default().push(i),
                Feedback::NoMatch => grey_positions.push(i),
            }
        }

        // A grey square only rules a letter out entirely if no other square
        // confirmed that same letter as exact or partial. Feedback protocols
        // mark surplus copies of a repeated letter grey even though the
        // letter is in the word.
        let mut nonmatch = HashSet::new();
        for i in grey_positions {
            let letter = letters[i];
            if !exact.contains_key(&letter) && !partial.contains_key(&letter) {
                nonmatch.insert(letter);
            }
        }

        Ok(MatchReport {
            exact,
            partial,
            nonmatch,
        })
    }
}

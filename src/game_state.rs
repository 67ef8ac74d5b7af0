//! The turn loop driving the assistant: recommend a guess, collect the
//! results, narrow the candidate list, repeat until a terminal state.

use crate::info_log;
use crate::report::{Feedback, MatchReport, SolverError, WORD_LENGTH};
use crate::solver::{filter_candidates, recommend_guess};

/// When this few candidates remain, list them all.
const SHORTLIST_LIMIT: usize = 10;

enum GameState {
    Continue,
    Solved,
    NoSolution,
}

/// What the user entered at the results prompt.
pub enum UserAction {
    /// A results string, one symbol per position of the last guess.
    Results(Vec<Feedback>),
    Exit,
    NewGame,
}

/// Presentation seam between the turn loop and the surrounding UI.
///
/// The loop never touches stdin/stdout itself, so tests can drive it with a
/// scripted implementation.
pub trait GameInterface {
    fn read_action(&mut self, guess: &str) -> UserAction;
    fn display_candidate_count(&mut self, count: usize);
    fn display_candidates(&mut self, candidates: &[String]);
    fn display_next_guess(&mut self, guess: &str);
    fn display_no_solution(&mut self);
    fn display_solution_found(&mut self, solution: &str, guesses: usize);
    fn display_solved(&mut self, guesses: usize);
    fn display_exit_message(&mut self);
    fn display_new_game_message(&mut self, word_count: usize);
}

fn check_game_state(candidates: &[String]) -> GameState {
    match candidates.len() {
        0 => GameState::NoSolution,
        1 => GameState::Solved,
        _ => GameState::Continue,
    }
}

fn is_all_exact(results: &[Feedback]) -> bool {
    results.len() == WORD_LENGTH && results.iter().all(|r| *r == Feedback::Match)
}

/// Runs games until a terminal state or an explicit exit.
///
/// Each turn builds a fresh report from the latest guess alone; earlier
/// constraints are already baked into the shrunken candidate list, so
/// reports never need merging across turns. Malformed results surface as a
/// `SolverError` and abort the loop.
pub fn game_loop<I: GameInterface>(
    initial_wordbank: &[String],
    interface: &mut I,
) -> Result<(), SolverError> {
    let mut candidates = initial_wordbank.to_vec();
    let mut report = MatchReport::default();
    let mut guesses = 0;

    loop {
        interface.display_candidate_count(candidates.len());
        match check_game_state(&candidates) {
            GameState::NoSolution => {
                interface.display_no_solution();
                return Ok(());
            }
            GameState::Solved => {
                interface.display_solution_found(&candidates[0], guesses + 1);
                return Ok(());
            }
            GameState::Continue => {}
        }
        if candidates.len() <= SHORTLIST_LIMIT {
            interface.display_candidates(&candidates);
        }

        let Some(guess) = recommend_guess(&candidates, &report).cloned() else {
            interface.display_no_solution();
            return Ok(());
        };
        interface.display_next_guess(&guess);
        guesses += 1;

        let results = match interface.read_action(&guess) {
            UserAction::Exit => {
                interface.display_exit_message();
                return Ok(());
            }
            UserAction::NewGame => {
                candidates = initial_wordbank.to_vec();
                report = MatchReport::default();
                guesses = 0;
                info_log!("reset to {} candidates", candidates.len());
                interface.display_new_game_message(candidates.len());
                continue;
            }
            UserAction::Results(results) => results,
        };

        if is_all_exact(&results) {
            interface.display_solved(guesses);
            return Ok(());
        }

        report = MatchReport::from_results(&guess, &results)?;
        candidates = filter_candidates(&candidates, &report)?;
        info_log!("turn {}: {} candidates remain", guesses, candidates.len());
    }
}

// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod cli;
pub mod game_state;
pub mod logging;
pub mod report;
pub mod solver;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use game_state::{GameInterface, UserAction, game_loop};
pub use report::{Feedback, MatchReport, SolverError};
pub use solver::{filter_candidates, letter_scores, recommend_guess, score_word};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};

use crate::game_state::{GameInterface, UserAction};
use crate::report::Feedback;
use clap::Parser;
use std::io::BufRead;

/// Word-game assistant CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited five-letter word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Console implementation of the game interface.
///
/// Wraps any `BufRead` so tests can script a session through a `Cursor`.
/// The results-format instructions are printed once per session, tracked by
/// the `instructions_shown` flag rather than any process-wide state.
pub struct CliInterface<R: BufRead> {
    reader: R,
    instructions_shown: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            instructions_shown: false,
        }
    }

    fn show_instructions_once(&mut self) {
        if self.instructions_shown {
            return;
        }
        println!("Please enter the results given, as a five-character string.");
        println!(
            "Use a 'g' to represent a green square, 'y' for a yellow, and '_' (underscore) for non-matching."
        );
        println!("You can also type 'exit' to quit or 'next' to start a new game.");
        self.instructions_shown = true;
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self, guess: &str) -> UserAction {
        self.show_instructions_once();
        println!("Enter results for {guess}:");
        let mut input = String::new();
        self.reader.read_line(&mut input).unwrap();
        let input = input.trim().to_lowercase();

        match input.as_str() {
            "exit" => UserAction::Exit,
            "next" => UserAction::NewGame,
            _ => UserAction::Results(input.chars().map(Feedback::from_char).collect()),
        }
    }

    fn display_candidate_count(&mut self, count: usize) {
        println!("There are {count} possible words remaining.");
    }

    fn display_candidates(&mut self, candidates: &[String]) {
        println!("They are: {}", candidates.join(","));
    }

    fn display_next_guess(&mut self, guess: &str) {
        println!("The next guess should be {guess}");
    }

    fn display_no_solution(&mut self) {
        println!("No remaining words left!");
    }

    fn display_solution_found(&mut self, solution: &str, guesses: usize) {
        println!("The solution must be {solution}. Done in {guesses} guesses.");
    }

    fn display_solved(&mut self, guesses: usize) {
        println!("Done in {guesses} guesses.");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        println!("New game started. Loaded {word_count} words.");
    }
}

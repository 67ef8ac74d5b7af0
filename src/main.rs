use std::io;
use std::process::ExitCode;
use wordle_helper::cli::{CliInterface, parse_cli};
use wordle_helper::game_state::game_loop;
use wordle_helper::logging;
use wordle_helper::wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};

fn main() -> ExitCode {
    logging::init();
    let cli = parse_cli();

    let initial_wordbank = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    if let Err(e) = game_loop(&initial_wordbank, &mut interface) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

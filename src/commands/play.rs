//! Interactive codebreaker mode
//!
//! The computer hides a code; the player types guesses until the code is
//! broken, the guesses run out, or they quit with `q`.

use crate::board::Board;
use std::io::{self, BufRead, Write};

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Broke the code in this many guesses
    Won(usize),
    Lost,
    Quit,
}

/// Play one game on `board`, reading guesses from `input`
///
/// Invalid guesses are reported and do not use up a turn. End of input is
/// treated as quitting.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    board: &mut Board,
    mut input: R,
    output: &mut W,
) -> io::Result<PlayOutcome> {
    writeln!(
        output,
        "Break the code: {} pegs, colours 1-6, {} guesses. Type q to quit.",
        crate::core::CODE_LENGTH,
        board.max_guesses()
    )?;

    let mut line = String::new();
    while !board.is_finished() {
        write!(output, "Enter your next guess: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let guess = line.trim();
        if guess.eq_ignore_ascii_case("q") {
            break;
        }

        match board.add_guess(guess) {
            Ok(Some(feedback)) => {
                writeln!(output, "Correct colour and correct place: {}", feedback.exact())?;
                writeln!(
                    output,
                    "Correct colour but wrong place:   {}",
                    feedback.color_only()
                )?;
                writeln!(output, "{board}")?;
            }
            Ok(None) => break,
            Err(e) => writeln!(output, "{guess} is not a valid guess: {e}")?,
        }
    }

    let outcome = if board.solved() {
        writeln!(output, "You win!")?;
        PlayOutcome::Won(board.history().len())
    } else if board.is_finished() {
        writeln!(output, "You lost. The code was {}.", board.code())?;
        PlayOutcome::Lost
    } else {
        writeln!(output, "You quit. The code was {}.", board.code())?;
        PlayOutcome::Quit
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use std::io::Cursor;

    fn play(code: &str, max_guesses: usize, input: &str) -> (PlayOutcome, String, Board) {
        let mut board = Board::with_max_guesses(Code::new(code).unwrap(), max_guesses);
        let mut output = Vec::new();
        let outcome = run_play(&mut board, Cursor::new(input), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap(), board)
    }

    #[test]
    fn winning_game() {
        let (outcome, output, board) = play("1234", 10, "1523\n1234\n");

        assert_eq!(outcome, PlayOutcome::Won(2));
        assert!(board.solved());
        assert!(output.contains("Correct colour and correct place: 1"));
        assert!(output.contains("Correct colour but wrong place:   2"));
        assert!(output.contains("You win!"));
    }

    #[test]
    fn invalid_guess_does_not_use_a_turn() {
        let (outcome, output, board) = play("1234", 10, "7890\nabc\n1234\n");

        assert_eq!(outcome, PlayOutcome::Won(1));
        assert_eq!(board.history().len(), 1);
        assert!(output.contains("7890 is not a valid guess"));
    }

    #[test]
    fn losing_game_reveals_code() {
        let (outcome, output, _) = play("1234", 2, "1111\n2222\n");

        assert_eq!(outcome, PlayOutcome::Lost);
        assert!(output.contains("You lost. The code was 1234."));
    }

    #[test]
    fn quitting() {
        let (outcome, output, board) = play("6543", 10, "1111\nq\n");

        assert_eq!(outcome, PlayOutcome::Quit);
        assert_eq!(board.history().len(), 1);
        assert!(output.contains("You quit. The code was 6543."));
    }

    #[test]
    fn end_of_input_quits() {
        let (outcome, _, _) = play("6543", 10, "");
        assert_eq!(outcome, PlayOutcome::Quit);
    }
}

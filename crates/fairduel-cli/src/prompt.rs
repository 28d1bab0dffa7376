//! Terminal implementation of the player collaborator.

use fairduel_core::{Commitment, MoveSet, PlayerChoice, PlayerIo, RoundOutcome, RoundReport};
use std::io::{self, BufRead, Write};

/// Prompt loop over a reader/writer pair
///
/// Generic so tests can drive it with in-memory buffers; production wires
/// it to locked stdin/stdout.
pub struct StdioPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdioPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn print_menu(&mut self, moves: &MoveSet) -> io::Result<()> {
        writeln!(self.output, "\nAvailable moves:")?;
        for (i, label) in moves.iter().enumerate() {
            writeln!(self.output, "{} - {}", i + 1, label)?;
        }
        writeln!(self.output, "0 - exit")?;
        writeln!(self.output, "? - help")?;
        write!(self.output, "Enter your move: ")?;
        self.output.flush()
    }
}

/// Parse one prompt response against a menu of `n` moves
///
/// Accepted tokens: a digit string in `[1, n]` (1-based move pick), the
/// literal `0` (quit), the literal `?` (help). Everything else, including
/// `00` and signed numbers, is rejected.
fn parse_choice(line: &str, n: usize) -> Option<PlayerChoice> {
    let token = line.trim();
    match token {
        "0" => Some(PlayerChoice::Quit),
        "?" => Some(PlayerChoice::Help),
        _ => {
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            match token.parse::<usize>() {
                Ok(pick) if (1..=n).contains(&pick) => Some(PlayerChoice::Move(pick - 1)),
                _ => None,
            }
        }
    }
}

/// Result line shown to the player; the challenger is the human
fn outcome_text(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::ChallengerWins => "You win!",
        RoundOutcome::DefenderWins => "Computer wins!",
        RoundOutcome::Draw => "Draw",
    }
}

impl<R: BufRead, W: Write> PlayerIo for StdioPlayer<R, W> {
    fn publish_commitment(&mut self, commitment: &Commitment) -> io::Result<()> {
        writeln!(self.output, "HMAC: {commitment}")
    }

    fn choose_move(&mut self, moves: &MoveSet) -> io::Result<PlayerChoice> {
        loop {
            self.print_menu(moves)?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // EOF: treat as the quit signal
                return Ok(PlayerChoice::Quit);
            }
            match parse_choice(&line, moves.len()) {
                Some(choice) => return Ok(choice),
                None => writeln!(self.output, "Invalid input, try again.")?,
            }
        }
    }

    fn show_help(&mut self, table: &str) -> io::Result<()> {
        writeln!(self.output, "{table}")
    }

    fn reveal_round(&mut self, report: &RoundReport) -> io::Result<()> {
        writeln!(self.output, "Your move: {}", report.challenger)?;
        writeln!(self.output, "Computer move: {}", report.defender)?;
        writeln!(self.output, "{}", outcome_text(report.outcome))?;
        writeln!(self.output, "HMAC key: {}", report.key.to_hex())
    }

    fn confirm_exit(&mut self) -> io::Result<()> {
        writeln!(self.output, "Exit the game.")
    }
}

//! Round orchestration: commit, publish, prompt, resolve.

use crate::crypto::{Commitment, SecretKey};
use crate::entropy::{Entropy, EntropyError};
use crate::games::{render_outcome_table, MoveRules, MoveSet};
use crate::protocol::{RoundId, RoundReport};
use std::io;
use thiserror::Error;
use tracing::debug;

/// Errors that end a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// No reliable randomness means no safe move selection or commitment.
    #[error("entropy source failure: {0}")]
    Entropy(#[from] EntropyError),

    #[error("player I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A parsed response to the move prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerChoice {
    /// 0-based index into the move set
    Move(usize),
    Quit,
    Help,
}

/// Player-facing collaborator: shows protocol output, collects the move
///
/// Lexical validation and re-prompting on unrecognized text stay inside
/// `choose_move`; the session only ever sees well-formed choices.
/// Implementations can be:
/// - a terminal prompt loop in the CLI
/// - a scripted player for tests
pub trait PlayerIo {
    /// Publish the commitment. Always called before `choose_move`.
    fn publish_commitment(&mut self, commitment: &Commitment) -> io::Result<()>;

    /// Collect the player's choice for this round
    fn choose_move(&mut self, moves: &MoveSet) -> io::Result<PlayerChoice>;

    /// Display the rendered outcome table
    fn show_help(&mut self, table: &str) -> io::Result<()>;

    /// Disclose the resolved round, key included
    fn reveal_round(&mut self, report: &RoundReport) -> io::Result<()>;

    /// Acknowledge the quit signal
    fn confirm_exit(&mut self) -> io::Result<()>;
}

impl<T: PlayerIo + ?Sized> PlayerIo for &mut T {
    fn publish_commitment(&mut self, commitment: &Commitment) -> io::Result<()> {
        (**self).publish_commitment(commitment)
    }

    fn choose_move(&mut self, moves: &MoveSet) -> io::Result<PlayerChoice> {
        (**self).choose_move(moves)
    }

    fn show_help(&mut self, table: &str) -> io::Result<()> {
        (**self).show_help(table)
    }

    fn reveal_round(&mut self, report: &RoundReport) -> io::Result<()> {
        (**self).reveal_round(report)
    }

    fn confirm_exit(&mut self) -> io::Result<()> {
        (**self).confirm_exit()
    }
}

/// How a session ended
#[derive(Clone, Debug)]
pub enum SessionEnd {
    /// A round resolved; the report carries the disclosed key
    Resolved(RoundReport),
    /// The player quit; nothing was disclosed
    Exited,
}

/// One interactive round of the commit-reveal game
///
/// Drives `AwaitingMove -> ShowingHelp -> AwaitingMove` as an explicit
/// loop; a help request abandons the pending commitment and starts over
/// with a fresh key and a fresh defender move, so the abandoned
/// commitment is never disclosed.
pub struct GameSession<E, IO> {
    moves: MoveSet,
    rules: MoveRules,
    entropy: E,
    io: IO,
}

impl<E: Entropy, IO: PlayerIo> GameSession<E, IO> {
    pub fn new(moves: MoveSet, entropy: E, io: IO) -> Self {
        let rules = MoveRules::new(&moves);
        Self {
            moves,
            rules,
            entropy,
            io,
        }
    }

    /// Play until the round resolves or the player quits
    ///
    /// The commitment is published before any player input is read; that
    /// ordering is the fairness guarantee.
    pub fn play(&mut self) -> Result<SessionEnd, SessionError> {
        loop {
            let round_id = RoundId::new();
            let span = tracing::info_span!("round", id = %round_id);
            let _guard = span.enter();

            let key = SecretKey::generate(&mut self.entropy)?;
            let defender = self.entropy.choose(self.moves.len())?;
            let commitment = Commitment::new(&key, self.moves.label(defender));
            debug!(%commitment, "committed to secret move");

            self.io.publish_commitment(&commitment)?;

            match self.io.choose_move(&self.moves)? {
                PlayerChoice::Quit => {
                    debug!("player quit, key stays undisclosed");
                    self.io.confirm_exit()?;
                    return Ok(SessionEnd::Exited);
                }
                PlayerChoice::Help => {
                    debug!("help requested, restarting round with a fresh key");
                    let table = render_outcome_table(&self.moves);
                    self.io.show_help(&table)?;
                    continue;
                }
                PlayerChoice::Move(challenger) => {
                    let outcome = self.rules.winner(challenger, defender);
                    debug!(
                        challenger = self.moves.label(challenger),
                        defender = self.moves.label(defender),
                        outcome = %outcome,
                        "round resolved"
                    );
                    let report = RoundReport {
                        round_id,
                        challenger: self.moves.label(challenger).to_string(),
                        defender: self.moves.label(defender).to_string(),
                        outcome,
                        commitment,
                        key,
                    };
                    self.io.reveal_round(&report)?;
                    return Ok(SessionEnd::Resolved(report));
                }
            }
        }
    }
}

//! Fairduel CLI
//!
//! Interactive provably-fair rock-paper-scissors over any odd set of
//! moves. The computer commits to its move with an HMAC before the player
//! chooses, then discloses the key so the player can verify the round.

mod prompt;

use clap::Parser;
use fairduel_core::{GameSession, MoveSet, OsEntropy, SessionEnd};
use prompt::StdioPlayer;
use std::io;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Play a provably fair game against the computer.
///
/// Pass an odd number (at least 3) of distinct move labels; each move
/// beats half of the others. The HMAC printed before your move commits
/// the computer to its choice, and the key printed afterwards lets you
/// check that commitment.
#[derive(Parser, Debug)]
#[command(name = "fairduel", version)]
struct Cli {
    /// Move labels, e.g. Rock Paper Scissors
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so protocol output on stdout stays clean
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let moves = match MoveSet::new(cli.moves) {
        Ok(moves) => moves,
        Err(err) => {
            eprintln!("Error: {err}. Please provide an odd number of non-repeating strings.");
            eprintln!("Example: fairduel Rock Paper Scissors Lizard Spock");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let player = StdioPlayer::new(stdin.lock(), stdout.lock());

    let mut session = GameSession::new(moves, OsEntropy, player);
    match session.play()? {
        SessionEnd::Resolved(report) => {
            tracing::info!(round = %report.round_id, outcome = %report.outcome, "round resolved");
        }
        SessionEnd::Exited => {
            tracing::info!("player exited without playing");
        }
    }
    Ok(())
}

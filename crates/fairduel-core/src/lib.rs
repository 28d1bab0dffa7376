//! Fairduel Core Library
//!
//! This crate provides the core logic for a provably-fair generalized
//! rock-paper-scissors game over any odd set of moves:
//! - Commit-reveal cryptography (SecretKey, Commitment)
//! - Circular-dominance rules and the win/lose/draw table
//! - Round orchestration with pluggable entropy and player I/O

pub mod crypto;
pub mod entropy;
pub mod games;
pub mod protocol;
pub mod session;

pub use crypto::{Commitment, SecretKey};
pub use entropy::{Entropy, EntropyError, MockEntropy, OsEntropy};
pub use games::{render_outcome_table, MoveRules, MoveSet, MoveSetError};
pub use protocol::{RoundId, RoundOutcome, RoundReport};
pub use session::{GameSession, PlayerChoice, PlayerIo, SessionEnd, SessionError};

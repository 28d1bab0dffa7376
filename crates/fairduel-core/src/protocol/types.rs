//! Protocol types.

use crate::crypto::{Commitment, SecretKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique round identifier, used for log correlation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    ChallengerWins,
    DefenderWins,
    Draw,
}

impl RoundOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::ChallengerWins => "Challenger wins",
            RoundOutcome::DefenderWins => "Defender wins",
            RoundOutcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The reveal record for a resolved round
///
/// Everything a player needs to check the round after the fact: the
/// commitment published before their move, and the key disclosed after it.
/// Recomputing HMAC(key, defender) and comparing against the commitment
/// proves the defender's move was fixed up front.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundReport {
    pub round_id: RoundId,
    /// Label of the player's move
    pub challenger: String,
    /// Label of the computer's committed move
    pub defender: String,
    pub outcome: RoundOutcome,
    /// Commitment published before the player moved
    pub commitment: Commitment,
    /// Key disclosed after the outcome
    pub key: SecretKey,
}

impl RoundReport {
    /// Recompute the commitment from the disclosed key and defender move
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.key, &self.defender)
    }
}

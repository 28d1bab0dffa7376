//! Generalized circular-dominance rules.

use super::MoveSet;
use crate::protocol::RoundOutcome;

/// Decides any (challenger, defender) pairing over an odd move set
///
/// The N moves sit on a cycle; each move beats the `half = N / 2` moves
/// ahead of it and loses to the `half` behind it. Odd N guarantees the
/// only tie is the identical move.
#[derive(Clone, Copy, Debug)]
pub struct MoveRules {
    n: usize,
    half: usize,
}

impl MoveRules {
    /// Build rules for the given move set
    pub fn new(moves: &MoveSet) -> Self {
        let n = moves.len();
        Self { n, half: n / 2 }
    }

    /// Outcome of `challenger` vs `defender`, both indices in `[0, N)`
    ///
    /// Computes the signed circular distance recentered into
    /// `[-half, half]`; its sign decides the winner. All arithmetic stays
    /// unsigned: `(i + half + n - j) % n` never underflows because `j < n`,
    /// and `< half` is exactly the distance-below-zero test.
    pub fn winner(&self, challenger: usize, defender: usize) -> RoundOutcome {
        assert!(
            challenger < self.n && defender < self.n,
            "move index out of range: ({challenger}, {defender}) with {} moves",
            self.n
        );
        if challenger == defender {
            RoundOutcome::Draw
        } else if (challenger + self.half + self.n - defender) % self.n < self.half {
            RoundOutcome::ChallengerWins
        } else {
            RoundOutcome::DefenderWins
        }
    }
}

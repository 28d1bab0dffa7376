//! Protocol types: round identity, outcomes, and the reveal record.

mod types;

pub use types::{RoundId, RoundOutcome, RoundReport};

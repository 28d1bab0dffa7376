//! Move sets, dominance rules, and the help table.

mod move_set;
mod rules;
mod table;

pub use move_set::{MoveSet, MoveSetError};
pub use rules::MoveRules;
pub use table::render_outcome_table;

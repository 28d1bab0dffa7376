//! Validated ordered set of move labels.

use std::collections::HashSet;
use thiserror::Error;

/// Errors from move-set validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveSetError {
    #[error("need at least 3 moves, got {0}")]
    TooFew(usize),

    #[error("move count must be odd, got {0}")]
    EvenCount(usize),

    #[error("duplicate move label: {0}")]
    Duplicate(String),
}

/// Ordered list of N distinct move labels, N odd and >= 3
///
/// Immutable once constructed; the circular-dominance rule is only valid
/// for odd N, so even counts are rejected outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    labels: Vec<String>,
}

impl MoveSet {
    /// Validate and construct a move set
    pub fn new(labels: Vec<String>) -> Result<Self, MoveSetError> {
        if labels.len() < 3 {
            return Err(MoveSetError::TooFew(labels.len()));
        }
        if labels.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount(labels.len()));
        }
        let mut seen = HashSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(MoveSetError::Duplicate(label.clone()));
            }
        }
        Ok(Self { labels })
    }

    /// Number of moves (always odd)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of the move at `index`
    ///
    /// Panics on out-of-range indices; callers hold validated indices only.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// Iterate over labels in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

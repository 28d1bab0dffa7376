//! Entropy capability for key generation and move selection.
//!
//! The protocol needs randomness in exactly two places: the per-round
//! HMAC key and the defender's uniformly chosen move. Both go through the
//! [`Entropy`] trait so tests can substitute a deterministic source.
//! Implementations can be:
//! - OsEntropy for production (OS CSPRNG)
//! - MockEntropy for testing

use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use thiserror::Error;

/// Errors from the entropy source
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The OS randomness source failed; there is no safe degraded mode.
    #[error("entropy source failure: {0}")]
    Source(#[from] rand::Error),
}

/// Source of cryptographically secure randomness
pub trait Entropy {
    /// Fill `dest` with random bytes
    fn random_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Pick a uniform index in `[0, len)`; `len` must be non-zero
    fn choose(&mut self, len: usize) -> Result<usize, EntropyError>;
}

impl<E: Entropy + ?Sized> Entropy for &mut E {
    fn random_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).random_bytes(dest)
    }

    fn choose(&mut self, len: usize) -> Result<usize, EntropyError> {
        (**self).choose(len)
    }
}

/// Production entropy source backed by the operating system CSPRNG
pub struct OsEntropy;

impl Entropy for OsEntropy {
    fn random_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }

    fn choose(&mut self, len: usize) -> Result<usize, EntropyError> {
        // gen_range samples uniformly, no modulo bias
        Ok(OsRng.gen_range(0..len))
    }
}

/// Deterministic entropy source for tests
///
/// Hands out the same key bytes every round and always picks the same
/// move index, so test scenarios can pin the defender's secret move.
pub struct MockEntropy {
    key: [u8; 32],
    pick: usize,
}

impl MockEntropy {
    /// Create a source that yields `key` bytes and picks index `pick`
    pub fn new(key: [u8; 32], pick: usize) -> Self {
        Self { key, pick }
    }
}

impl Entropy for MockEntropy {
    fn random_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        for (d, s) in dest.iter_mut().zip(self.key.iter().cycle()) {
            *d = *s;
        }
        Ok(())
    }

    fn choose(&mut self, len: usize) -> Result<usize, EntropyError> {
        Ok(self.pick % len)
    }
}

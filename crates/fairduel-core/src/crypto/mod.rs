//! Cryptographic primitives for the Fairduel protocol.
//!
//! This module provides:
//! - SecretKey: the per-round HMAC key, disclosed only after the outcome
//! - Commitment: the keyed digest binding the defender's move

mod commitment;

pub use commitment::{Commitment, SecretKey};

//! SecretKey and Commitment for the commit-reveal scheme.

use crate::entropy::{Entropy, EntropyError};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Per-round HMAC key, disclosed to the player only after the outcome
#[derive(Clone, Serialize, Deserialize)]
pub struct SecretKey(#[serde(with = "hex32_serde")] [u8; 32]);

impl SecretKey {
    /// Generate a fresh random key from the given entropy source
    pub fn generate<E: Entropy + ?Sized>(entropy: &mut E) -> Result<Self, EntropyError> {
        let mut bytes = [0u8; 32];
        entropy.random_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex encoding for the reveal step
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..8]))
    }
}

/// Commitment = HMAC-SHA256(key, move label)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "hex32_serde")] [u8; 32]);

impl Commitment {
    /// Commit to a move label under the given key
    pub fn new(key: &SecretKey, label: &str) -> Self {
        let mut mac =
            HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
        mac.update(label.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given key and move label produce this commitment
    pub fn verify(&self, key: &SecretKey, label: &str) -> bool {
        *self == Self::new(key, label)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({}..)", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

mod hex32_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        let bytes = hex::decode(&hex_str).map_err(serde::de::Error::custom)?;
        if bytes.len() != 32 {
            return Err(serde::de::Error::custom("expected 32 bytes"));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::OsEntropy;
    use std::collections::HashSet;

    fn random_key() -> SecretKey {
        SecretKey::generate(&mut OsEntropy).expect("entropy available in tests")
    }

    #[test]
    fn test_commitment_is_deterministic() {
        let key = random_key();
        assert_eq!(Commitment::new(&key, "Rock"), Commitment::new(&key, "Rock"));
    }

    #[test]
    fn test_commitment_verification() {
        let key = random_key();
        let commitment = Commitment::new(&key, "Rock");

        assert!(commitment.verify(&key, "Rock"));
    }

    #[test]
    fn test_different_moves_different_commitments() {
        let key = random_key();
        let commitment1 = Commitment::new(&key, "Rock");
        let commitment2 = Commitment::new(&key, "Paper");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_different_keys_different_commitments() {
        let key1 = random_key();
        let key2 = random_key();
        let commitment1 = Commitment::new(&key1, "Rock");
        let commitment2 = Commitment::new(&key2, "Rock");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let key = random_key();
        let commitment = Commitment::new(&key, "Rock");

        assert!(!commitment.verify(&key, "Paper"));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let key1 = random_key();
        let key2 = random_key();
        let commitment = Commitment::new(&key1, "Rock");

        assert!(!commitment.verify(&key2, "Rock"));
    }

    #[test]
    fn test_no_commitment_collisions_across_keys() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let commitment = Commitment::new(&random_key(), "Rock");
            assert!(seen.insert(*commitment.as_bytes()));
        }
    }

    #[test]
    fn test_key_is_32_bytes_and_hex_is_64_chars() {
        let key = random_key();
        assert_eq!(key.as_bytes().len(), 32);
        assert_eq!(key.to_hex().len(), 64);
    }

    #[test]
    fn test_keys_never_repeat() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(*random_key().as_bytes()));
        }
    }

    #[test]
    fn test_commitment_hex_display() {
        let key = SecretKey::from_bytes([0u8; 32]);
        let rendered = Commitment::new(&key, "Rock").to_string();
        assert_eq!(rendered.len(), 64);
        assert!(rendered.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

//! SHA-256 implementation of the `Hasher` trait.
//!
//! This implementation uses the `sha2` crate to generate SHA-256 digests.
//!
//! # Example
//! ```rust
//! use stretchy_cryptography::{Hasher, Sha256};
//!
//! // Create a new SHA-256 hasher
//! let mut hasher = Sha256::new();
//!
//! // Update the hasher with some messages
//! hasher.update(b"hello,").unwrap();
//! hasher.update(b"world!").unwrap();
//!
//! // Finalize the hasher to get the digest
//! let digest = hasher.finalize();
//!
//! // Print the digest
//! println!("digest: {}", stretchy_utils::hex(&digest));
//! ```

use crate::{Error, Hasher};
use sha2::{Digest as _, Sha256 as ISha256};

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Length of a SHA-256 block in bytes.
pub const BLOCK_LENGTH: usize = 64;

/// Generate a SHA-256 digest from a message.
pub fn hash(message: &[u8]) -> Vec<u8> {
    ISha256::digest(message).to_vec()
}

/// SHA-256 hasher.
#[derive(Clone, Debug, Default)]
pub struct Sha256 {
    hasher: ISha256,
}

impl Sha256 {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self {
            hasher: ISha256::new(),
        }
    }
}

impl Hasher for Sha256 {
    fn update(&mut self, message: &[u8]) -> Result<usize, Error> {
        self.hasher.update(message);
        Ok(message.len())
    }

    fn sum(&self, mut out: Vec<u8>) -> Vec<u8> {
        // Finalize a copy so recorded data survives
        out.extend_from_slice(&self.hasher.clone().finalize());
        out
    }

    fn reset(&mut self) {
        self.hasher = ISha256::new();
    }

    fn size(&self) -> usize {
        DIGEST_LENGTH
    }

    fn block_size(&self) -> usize {
        BLOCK_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stretchy_utils::hex;

    const HELLO_DIGEST: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";
    const EMPTY_DIGEST: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_sha256() {
        let msg = b"hello world";

        // Generate initial hash
        let mut hasher = Sha256::new();
        hasher.update(msg).unwrap();
        let digest = hasher.finalize();
        assert_eq!(hex(&digest), HELLO_DIGEST);

        // Finalize again without new data
        let digest = hasher.finalize();
        assert_eq!(hex(&digest), HELLO_DIGEST);

        // Test simple hasher
        let hash = hash(msg);
        assert_eq!(hex(&hash), HELLO_DIGEST);
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(hex(&Sha256::new().finalize()), EMPTY_DIGEST);
        assert_eq!(hex(&hash(&[])), EMPTY_DIGEST);
    }

    #[test]
    fn test_sha256_len() {
        let hasher = Sha256::new();
        assert_eq!(hasher.size(), DIGEST_LENGTH);
        assert_eq!(hasher.block_size(), BLOCK_LENGTH);
    }
}

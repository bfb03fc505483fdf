//! SHA-512 implementation of the `Hasher` trait.
//!
//! This implementation uses the `sha2` crate to generate SHA-512 digests. Its 64-byte digest makes
//! it a useful base when a larger stretched digest is needed at a given stretch factor.

use crate::{Error, Hasher};
use sha2::{Digest as _, Sha512 as ISha512};

/// Length of a SHA-512 digest in bytes.
pub const DIGEST_LENGTH: usize = 64;

/// Length of a SHA-512 block in bytes.
pub const BLOCK_LENGTH: usize = 128;

/// Generate a SHA-512 digest from a message.
pub fn hash(message: &[u8]) -> Vec<u8> {
    ISha512::digest(message).to_vec()
}

/// SHA-512 hasher.
#[derive(Clone, Debug, Default)]
pub struct Sha512 {
    hasher: ISha512,
}

impl Sha512 {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self {
            hasher: ISha512::new(),
        }
    }
}

impl Hasher for Sha512 {
    fn update(&mut self, message: &[u8]) -> Result<usize, Error> {
        self.hasher.update(message);
        Ok(message.len())
    }

    fn sum(&self, mut out: Vec<u8>) -> Vec<u8> {
        out.extend_from_slice(&self.hasher.clone().finalize());
        out
    }

    fn reset(&mut self) {
        self.hasher = ISha512::new();
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
    use stretchy_utils::{from_hex_formatted, hex};

    const HELLO_DIGEST: &str = "
        309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f
        989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f
    ";

    #[test]
    fn test_sha512() {
        let expected = from_hex_formatted(HELLO_DIGEST).unwrap();

        let mut hasher = Sha512::new();
        hasher.update(b"hello world").unwrap();
        assert_eq!(hasher.finalize(), expected);
        assert_eq!(hash(b"hello world"), expected);
    }

    #[test]
    fn test_sha512_reset() {
        let mut hasher = Sha512::new();
        hasher.update(b"hello mars").unwrap();
        hasher.reset();
        hasher.update(b"hello world").unwrap();
        assert_eq!(hex(&hasher.finalize()), hex(&hash(b"hello world")));
    }

    #[test]
    fn test_sha512_len() {
        let hasher = Sha512::new();
        assert_eq!(hasher.size(), DIGEST_LENGTH);
        assert_eq!(hasher.block_size(), BLOCK_LENGTH);
        assert_eq!(hasher.finalize().len(), DIGEST_LENGTH);
    }
}

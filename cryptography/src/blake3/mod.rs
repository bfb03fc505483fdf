//! BLAKE3 implementation of the `Hasher` trait.
//!
//! This implementation uses the `blake3` crate to generate BLAKE3 digests. Unlike SHA-2, BLAKE3
//! can produce its digest without consuming its state, so [Hasher::sum] never copies the hasher.
//!
//! # Example
//! ```rust
//! use stretchy_cryptography::{Blake3, Hasher};
//!
//! let mut hasher = Blake3::new();
//! hasher.update(b"hello,").unwrap();
//! hasher.update(b"world!").unwrap();
//! let digest = hasher.finalize();
//! assert_eq!(digest.len(), 32);
//! ```

use crate::{Error, Hasher};
use blake3::Hasher as IBlake3;

/// Length of a BLAKE3 digest in bytes.
pub const DIGEST_LENGTH: usize = blake3::OUT_LEN;

/// Length of a BLAKE3 block in bytes.
pub const BLOCK_LENGTH: usize = blake3::BLOCK_LEN;

/// Generate a BLAKE3 digest from a message.
pub fn hash(message: &[u8]) -> Vec<u8> {
    blake3::hash(message).as_bytes().to_vec()
}

/// BLAKE3 hasher.
#[derive(Clone, Debug, Default)]
pub struct Blake3 {
    hasher: IBlake3,
}

impl Blake3 {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self {
            hasher: IBlake3::new(),
        }
    }
}

impl Hasher for Blake3 {
    fn update(&mut self, message: &[u8]) -> Result<usize, Error> {
        self.hasher.update(message);
        Ok(message.len())
    }

    fn sum(&self, mut out: Vec<u8>) -> Vec<u8> {
        out.extend_from_slice(self.hasher.finalize().as_bytes());
        out
    }

    fn reset(&mut self) {
        self.hasher.reset();
    }

    fn size(&self) -> usize {
        DIGEST_LENGTH
    }

    fn block_size(&self) -> usize {
        BLOCK_LENGTH
    }
}

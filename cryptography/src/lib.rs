//! Stretch the digest of any hash function into a larger, one-hot encoded digest.
//!
//! A [Stretchy] hasher wraps some base [Hasher] and, whenever a digest is requested, expands the
//! base digest so that every `2^stretch` bits of it become a `2^(2^stretch)` bit block with a single
//! bit set. The result is `2^(2^stretch - stretch)` times larger than the base digest and heavily
//! biased toward zero bits.
//!
//! # Example
//!
//! ```rust
//! use stretchy_cryptography::{Hasher, Sha256, Stretchy};
//!
//! let mut hasher = Stretchy::<Sha256>::new(2).unwrap();
//! hasher.update(b"hello world").unwrap();
//! let digest = hasher.finalize();
//! assert_eq!(digest.len(), hasher.size());
//! assert_eq!(digest.len(), 128);
//! ```
//!
//! # Status
//!
//! `stretchy-cryptography` is **ALPHA** software and is not yet recommended for production use.
//! Stretching is not claimed to preserve the collision resistance of the base hash.

use thiserror::Error;

pub mod sha256;
pub use sha256::Sha256;
pub mod sha512;
pub use sha512::Sha512;
pub mod blake3;
pub use blake3::Blake3;
pub mod registry;
pub use registry::{Algorithm, Registry};
pub mod stretch;
pub use stretch::{Stretch, Stretchy};

/// Errors that can occur when constructing or using a [Hasher].
#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported stretch factor: {0} (min: {min})", min = stretch::MIN_STRETCH)]
    StretchTooSmall(u8),
    #[error("unsupported stretch factor: {0} (max: {max})", max = stretch::MAX_STRETCH)]
    StretchTooLarge(u8),
    #[error("input of {bits} bits does not split into {width} bit chunks")]
    UnalignedInput { bits: usize, width: usize },
    #[error("block {0} does not have exactly one bit set")]
    InvalidBlock(usize),
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("algorithm not registered: {0}")]
    UnregisteredAlgorithm(Algorithm),
    #[error("bits: {0}")]
    Bits(#[from] stretchy_utils::bits::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Interface that stretchy primitives rely on for hashing.
///
/// The trait mirrors the capability set of a streaming hash: data is appended with
/// [Hasher::update], digests are read with [Hasher::sum] (which never consumes the recorded
/// data), and [Hasher::reset] returns the hasher to its empty state.
///
/// The trait is object safe, so hashers selected at runtime can be used as `Box<dyn Hasher>`
/// (and wrapped by [Stretchy] like any other hasher).
pub trait Hasher: Send + Sync {
    /// Append message to previously recorded data.
    ///
    /// Returns the number of bytes consumed. Implementations that can fail should report
    /// [Error::Io].
    fn update(&mut self, message: &[u8]) -> Result<usize, Error>;

    /// Append the digest of all recorded data to `out` and return it.
    ///
    /// Recorded data is left untouched, so calling `sum` repeatedly (without an intervening
    /// `update`) returns the same digest.
    fn sum(&self, out: Vec<u8>) -> Vec<u8>;

    /// Return the digest of all recorded data.
    fn finalize(&self) -> Vec<u8> {
        self.sum(Vec::with_capacity(self.size()))
    }

    /// Reset the hasher to the state of having recorded nothing.
    fn reset(&mut self);

    /// Number of bytes [Hasher::sum] appends.
    fn size(&self) -> usize;

    /// Block size of the underlying algorithm in bytes.
    fn block_size(&self) -> usize;
}

impl<H: Hasher + ?Sized> Hasher for Box<H> {
    fn update(&mut self, message: &[u8]) -> Result<usize, Error> {
        (**self).update(message)
    }

    fn sum(&self, out: Vec<u8>) -> Vec<u8> {
        (**self).sum(out)
    }

    fn finalize(&self) -> Vec<u8> {
        (**self).finalize()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn size(&self) -> usize {
        (**self).size()
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }
}

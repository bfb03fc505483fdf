//! Expand a digest into a larger, sparse digest with one set bit per chunk.
//!
//! Stretching splits its input into chunks of `w = 2^stretch` bits. Each chunk is read as a
//! little-endian integer `v` and replaced by a block of `2^w` bits where only bit `v` is set.
//! Blocks are emitted in the same order as the chunks they encode. Bits are numbered
//! least-significant first within each byte (see [stretchy_utils::bits]).
//!
//! An input of `B` bytes always stretches to `B * 2^(2^stretch - stretch)` bytes:
//!
//! | stretch | chunk bits | block bits | expansion |
//! |---------|------------|------------|-----------|
//! | 1       | 2          | 4          | 2         |
//! | 2       | 4          | 16         | 4         |
//! | 3       | 8          | 256        | 32        |
//! | 4       | 16         | 65536      | 4096      |
//!
//! The mapping is injective, so [unstretch] recovers the original input from any stretched
//! output. Stretching does not add entropy and is not claimed to preserve the collision
//! resistance of the digest it expands.
//!
//! # Example
//!
//! ```rust
//! use stretchy_cryptography::stretch::{stretch, unstretch, Stretch};
//!
//! let factor = Stretch::new(1).unwrap();
//! let stretched = stretch(&[0b11_10_01_00], factor).unwrap();
//! assert_eq!(stretched, vec![0x21, 0x84]);
//! assert_eq!(unstretch(&stretched, factor).unwrap(), vec![0b11_10_01_00]);
//! ```

use crate::Error;
use std::fmt::{Display, Formatter};
use stretchy_utils::bits::{from_bits, to_bits};

mod stretchy;
pub use stretchy::Stretchy;

/// Smallest supported stretch factor.
pub const MIN_STRETCH: u8 = 1;

/// Largest supported stretch factor.
///
/// Each increment squares the block width, so a stretch of 5 would expand a 32-byte digest to
/// 256 MiB.
pub const MAX_STRETCH: u8 = 4;

/// A validated stretch factor in `MIN_STRETCH..=MAX_STRETCH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stretch(u8);

impl Stretch {
    /// Create a stretch factor, rejecting values outside of `MIN_STRETCH..=MAX_STRETCH`.
    pub fn new(value: u8) -> Result<Self, Error> {
        if value < MIN_STRETCH {
            return Err(Error::StretchTooSmall(value));
        }
        if value > MAX_STRETCH {
            return Err(Error::StretchTooLarge(value));
        }
        Ok(Self(value))
    }

    /// The raw stretch factor.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Width of each input chunk in bits (`2^stretch`).
    pub const fn chunk_bits(self) -> usize {
        1 << self.0
    }

    /// Width of each one-hot output block in bits (`2^chunk_bits`).
    pub const fn block_bits(self) -> usize {
        1 << self.chunk_bits()
    }

    /// Ratio of output length to input length (`2^(2^stretch - stretch)`).
    pub const fn expansion(self) -> usize {
        1 << (self.chunk_bits() - self.0 as usize)
    }

    /// Length in bytes of `len` bytes once stretched.
    pub const fn stretched_len(self, len: usize) -> usize {
        len * self.expansion()
    }
}

impl Default for Stretch {
    fn default() -> Self {
        Self(MIN_STRETCH)
    }
}

impl TryFrom<u8> for Stretch {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stretch> for u8 {
    fn from(value: Stretch) -> Self {
        value.0
    }
}

impl Display for Stretch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stretch `data` so that every chunk of `2^stretch` bits becomes a one-hot block.
///
/// Returns [Error::UnalignedInput] if the bit length of `data` is not a multiple of the chunk
/// width (only possible for a stretch of 4 with an odd number of bytes).
pub fn stretch(data: &[u8], stretch: Stretch) -> Result<Vec<u8>, Error> {
    let bits = to_bits(data);
    let width = stretch.chunk_bits();
    if bits.len() % width != 0 {
        return Err(Error::UnalignedInput {
            bits: bits.len(),
            width,
        });
    }

    // Block `i` starts at bit `i * 2^w` and has only bit `v` set
    let block = stretch.block_bits();
    let mut stretched = vec![false; (bits.len() / width) * block];
    for (index, chunk) in bits.chunks_exact(width).enumerate() {
        stretched[index * block + chunk_value(chunk)] = true;
    }
    Ok(from_bits(&stretched)?)
}

/// Recover the data that [stretch] expanded into `data`.
///
/// Returns [Error::UnalignedInput] if `data` is not made of whole blocks and
/// [Error::InvalidBlock] if any block does not have exactly one bit set.
pub fn unstretch(data: &[u8], stretch: Stretch) -> Result<Vec<u8>, Error> {
    let bits = to_bits(data);
    let block = stretch.block_bits();
    if bits.len() % block != 0 {
        return Err(Error::UnalignedInput {
            bits: bits.len(),
            width: block,
        });
    }

    let width = stretch.chunk_bits();
    let mut unstretched = Vec::with_capacity((bits.len() / block) * width);
    for (index, chunk) in bits.chunks_exact(block).enumerate() {
        let mut set = chunk
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit)
            .map(|(position, _)| position);
        let value = match (set.next(), set.next()) {
            (Some(value), None) => value,
            _ => return Err(Error::InvalidBlock(index)),
        };
        unstretched.extend((0..width).map(|j| value & (1 << j) != 0));
    }
    Ok(from_bits(&unstretched)?)
}

/// Interpret a chunk of bits as a little-endian integer.
fn chunk_value(chunk: &[bool]) -> usize {
    chunk
        .iter()
        .enumerate()
        .filter(|&(_, &bit)| bit)
        .fold(0, |value, (j, _)| value | (1 << j))
}

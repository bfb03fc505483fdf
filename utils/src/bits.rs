//! Conversion between bytes and an ordered sequence of bits.
//!
//! Bits are ordered least-significant first within each byte: bit `8 * i + j` of the sequence is
//! `(data[i] >> j) & 1`. This matches the block layout used by bit-vectors elsewhere, so a
//! sequence produced here can be indexed the same way as the packed bytes it came from.

use thiserror::Error;

/// Number of bits in a byte.
pub const BITS_PER_BYTE: usize = u8::BITS as usize;

/// Errors that can occur when packing bits into bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("bit length is not a multiple of 8: {0}")]
    Unaligned(usize),
}

/// Expands `data` into one `bool` per bit.
pub fn to_bits(data: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(data.len() * BITS_PER_BYTE);
    for byte in data {
        for j in 0..BITS_PER_BYTE {
            bits.push(byte & (1 << j) != 0);
        }
    }
    bits
}

/// Packs `bits` into bytes.
///
/// Returns an error if the number of bits is not a multiple of 8 (trailing bits are never
/// silently dropped).
pub fn from_bits(bits: &[bool]) -> Result<Vec<u8>, Error> {
    if bits.len() % BITS_PER_BYTE != 0 {
        return Err(Error::Unaligned(bits.len()));
    }
    let bytes = bits
        .chunks_exact(BITS_PER_BYTE)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .filter(|&(_, &bit)| bit)
                .fold(0u8, |byte, (j, _)| byte | (1 << j))
        })
        .collect();
    Ok(bytes)
}

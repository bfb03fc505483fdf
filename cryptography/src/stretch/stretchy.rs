use super::{stretch, Stretch};
use crate::{Error, Hasher};
use std::io;
use stretchy_utils::bits::BITS_PER_BYTE;
use tracing::{debug, trace};

/// A [Hasher] that stretches the digest of a base [Hasher].
///
/// Input is forwarded to the base hasher unchanged. Only the final base digest is stretched,
/// each time [Hasher::sum] is called, so the stretch factor has no effect on how data is
/// recorded (or on [Hasher::block_size]).
///
/// # Example
///
/// ```rust
/// use stretchy_cryptography::{Blake3, Hasher, Stretchy};
///
/// let mut hasher = Stretchy::with(Blake3::new, 3).unwrap();
/// hasher.update(b"hello world").unwrap();
/// assert_eq!(hasher.size(), 1024);
/// assert_eq!(hasher.finalize(), hasher.finalize());
/// ```
#[derive(Clone, Debug)]
pub struct Stretchy<H: Hasher> {
    base: H,
    stretch: Stretch,
}

impl<H: Hasher> Stretchy<H> {
    /// Create a hasher that stretches the digest of `H::default()` by `stretch`.
    pub fn new(stretch: u8) -> Result<Self, Error>
    where
        H: Default,
    {
        Self::with(H::default, stretch)
    }

    /// Create a hasher that stretches the digest of the hasher returned by `new_base`.
    ///
    /// `stretch` is validated before the base hasher is created. The base digest must split
    /// evenly into chunks of `2^stretch` bits.
    pub fn with<F: FnOnce() -> H>(new_base: F, stretch: u8) -> Result<Self, Error> {
        let stretch = Stretch::new(stretch)?;
        let base = new_base();
        let bits = base.size() * BITS_PER_BYTE;
        let width = stretch.chunk_bits();
        if bits % width != 0 {
            return Err(Error::UnalignedInput { bits, width });
        }
        debug!(
            stretch = stretch.get(),
            base_size = base.size(),
            size = stretch.stretched_len(base.size()),
            "created stretchy hasher"
        );
        Ok(Self { base, stretch })
    }

    /// Stretch factor applied to the base digest.
    pub fn stretch(&self) -> Stretch {
        self.stretch
    }
}

impl<H: Hasher + Default> Default for Stretchy<H> {
    fn default() -> Self {
        // The minimum chunk width divides any whole number of bytes
        Self {
            base: H::default(),
            stretch: Stretch::default(),
        }
    }
}

impl<H: Hasher> Hasher for Stretchy<H> {
    fn update(&mut self, message: &[u8]) -> Result<usize, Error> {
        self.base.update(message)
    }

    fn sum(&self, mut out: Vec<u8>) -> Vec<u8> {
        let digest = self.base.finalize();
        let stretched =
            stretch(&digest, self.stretch).expect("base digest alignment checked on creation");
        trace!(
            stretch = self.stretch.get(),
            base = digest.len(),
            stretched = stretched.len(),
            "stretched digest"
        );
        out.extend_from_slice(&stretched);
        out
    }

    fn reset(&mut self) {
        self.base.reset();
        trace!(stretch = self.stretch.get(), "reset stretchy hasher");
    }

    fn size(&self) -> usize {
        self.stretch.stretched_len(self.base.size())
    }

    fn block_size(&self) -> usize {
        self.base.block_size()
    }
}

impl<H: Hasher> io::Write for Stretchy<H> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(|err| match err {
            Error::Io(err) => err,
            err => io::Error::other(err),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

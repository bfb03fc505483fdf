//! Select a [Hasher] at runtime from an explicitly populated set of algorithms.
//!
//! Nothing is registered implicitly: callers decide which algorithms are available by
//! registering a constructor for each, or by starting from [Registry::standard].
//!
//! # Example
//!
//! ```rust
//! use stretchy_cryptography::{Algorithm, Hasher, Registry, Sha256};
//!
//! let mut registry = Registry::new();
//! registry.register(Algorithm::Sha256, || Box::new(Sha256::new()));
//!
//! let mut hasher = registry.stretchy(Algorithm::Sha256, 1).unwrap();
//! hasher.update(b"hello world").unwrap();
//! assert_eq!(hasher.finalize().len(), 64);
//!
//! assert!(registry.hasher(Algorithm::Blake3).is_err());
//! ```

use crate::{Blake3, Error, Hasher, Sha256, Sha512, Stretch, Stretchy};
use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Identifier of a base hash algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Sha256,
    Sha512,
    Blake3,
}

impl Algorithm {
    /// All known algorithms.
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha256, Algorithm::Sha512, Algorithm::Blake3];

    /// Lower-case name of the algorithm.
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
            Algorithm::Blake3 => "blake3",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Creates a fresh instance of some [Hasher].
pub type Constructor = fn() -> Box<dyn Hasher>;

/// Mapping from [Algorithm] to the [Constructor] that instantiates it.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    constructors: BTreeMap<Algorithm, Constructor>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry containing every algorithm provided by this crate.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Algorithm::Sha256, || Box::new(Sha256::new()));
        registry.register(Algorithm::Sha512, || Box::new(Sha512::new()));
        registry.register(Algorithm::Blake3, || Box::new(Blake3::new()));
        registry
    }

    /// Register `constructor` for `algorithm`, returning the constructor it replaced (if any).
    pub fn register(
        &mut self,
        algorithm: Algorithm,
        constructor: Constructor,
    ) -> Option<Constructor> {
        self.constructors.insert(algorithm, constructor)
    }

    /// Returns whether `algorithm` has been registered.
    pub fn contains(&self, algorithm: Algorithm) -> bool {
        self.constructors.contains_key(&algorithm)
    }

    /// Registered algorithms, in sorted order.
    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.constructors.keys().copied()
    }

    /// Create a new instance of `algorithm`.
    pub fn hasher(&self, algorithm: Algorithm) -> Result<Box<dyn Hasher>, Error> {
        let constructor = self
            .constructors
            .get(&algorithm)
            .ok_or(Error::UnregisteredAlgorithm(algorithm))?;
        Ok(constructor())
    }

    /// Create a [Stretchy] hasher over a new instance of `algorithm`.
    ///
    /// `stretch` is validated before `algorithm` is looked up.
    pub fn stretchy(
        &self,
        algorithm: Algorithm,
        stretch: u8,
    ) -> Result<Stretchy<Box<dyn Hasher>>, Error> {
        let stretch = Stretch::new(stretch)?;
        let base = self.hasher(algorithm)?;
        Stretchy::with(|| base, stretch.get())
    }
}

// SPDX-License-Identifier: CC0-1.0

//! Streaming SHA-256.
//!
//! This is a small library which implements the SHA-256 hash function as
//! specified in FIPS 180-4. Data is pushed into a [`sha256::HashEngine`] in
//! slices of any size; the engine only ever holds a single 64-byte block, so
//! memory use does not depend on the length of the message.
//!
//! ## Commonly used operations
//!
//! Hashing a single byte slice or a string:
//!
//! ```rust
//! use sha256_hashes::sha256;
//!
//! let bytes = [0u8; 5];
//! let hash_of_bytes = sha256::Hash::hash(&bytes);
//! let hash_of_string = sha256::Hash::hash("some string".as_bytes());
//! ```
//!
//! Hashing content incrementally:
//!
//! ```rust
//! use sha256_hashes::{sha256, HashEngine as _};
//!
//! let mut engine = sha256::HashEngine::new();
//! engine.input(b"hello");
//! engine.input(b" ");
//! engine.input(b"world");
//! let hash = engine.finalize();
//! assert_eq!(hash, sha256::Hash::hash(b"hello world"));
//! ```
//!
//! Hashing content from a reader:
//!
//! ```rust
//! # #[cfg(feature = "std")]
//! # fn main() -> std::io::Result<()> {
//! use sha256_hashes::sha256;
//!
//! let reader: &[u8] = b"hello"; // in real code, this could be a `File` or `TcpStream`
//! let hash = sha256::hash_reader(reader)?;
//! assert_eq!(hash, sha256::Hash::hash(b"hello"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "std"))]
//! # fn main() {}
//! ```

// Coding conventions
#![warn(missing_docs)]
// Experimental features we need.
#![cfg_attr(bench, feature(test))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(test), not(feature = "std")), no_std)]

#[cfg(feature = "serde")]
/// A generic serialization/deserialization framework.
pub extern crate serde;

#[cfg(bench)]
extern crate test;

/// Re-export the `hex-conservative` crate.
pub extern crate hex;

pub mod error;
#[cfg(feature = "std")]
mod impls;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod sha256;

use core::fmt;

/// Convenience alias for the SHA-256 digest type.
pub type Sha256 = sha256::Hash;

/// A hashing engine which bytes can be serialized into.
pub trait HashEngine: Clone + Default {
    /// The hash type produced when the engine is finalized.
    type Hash;

    /// Length of the hash's internal block size, in bytes.
    const BLOCK_SIZE: usize;

    /// Adds data to the hash engine.
    fn input(&mut self, data: &[u8]);

    /// Returns the number of bytes input into the engine so far.
    fn n_bytes_hashed(&self) -> u64;

    /// Pads the remaining input and produces the final digest.
    ///
    /// Consumes the engine: a finalized engine cannot take more input.
    fn finalize(self) -> Self::Hash;
}

/// Attempted to create a hash from an invalid length slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FromSliceError {
    expected: usize,
    got: usize,
}

impl FromSliceError {
    /// Returns the expected slice length.
    pub fn expected_length(&self) -> usize { self.expected }

    /// Returns the invalid slice length.
    pub fn invalid_length(&self) -> usize { self.got }
}

impl fmt::Display for FromSliceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid slice length {} (expected {})", self.got, self.expected)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromSliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { None }
}

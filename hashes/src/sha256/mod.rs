// SPDX-License-Identifier: CC0-1.0

//! SHA256 implementation.
//!
//! The engine keeps a single 64-byte block buffer. Input is copied into the buffer and every
//! time it fills up the block is run through [`compress`] and the buffer is reused, so hashing
//! an arbitrarily long stream needs a fixed amount of memory.

#[cfg(bench)]
mod benches;
mod crypto;

use core::{borrow, cmp, fmt, ops, str};
#[cfg(feature = "std")]
use std::io;

use hex::{DisplayHex as _, FromHex as _};

pub use self::crypto::{compress, ROUND_CONSTANTS};
use crate::error::HexToArrayError;
use crate::{FromSliceError, HashEngine as _};

/// Length of a SHA256 block, in bytes.
pub const BLOCK_SIZE: usize = 64;

/// The SHA256 initial hash value.
///
/// First 32 bits of the fractional parts of the square roots of the first 8 primes.
pub const INITIAL_STATE: [u32; 8] =
    [0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19];

// Bytes needed at the end of the last block for the 0x80 marker and the length field.
const MIN_PADDING: usize = 1 + 8;

/// Output of the SHA256 hash function.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Hash([u8; 32]);

impl Hash {
    /// Length of the hash, in bytes.
    pub const LEN: usize = 32;

    /// Creates a default hash engine, adds `bytes` to it, then finalizes the engine.
    #[allow(clippy::self_named_constructors)] // `hash` is a verb but `Hash` is a noun.
    pub fn hash(bytes: &[u8]) -> Self {
        let mut engine = Self::engine();
        engine.input(bytes);
        engine.finalize()
    }

    /// Returns a hash engine that is ready to be used for data.
    pub const fn engine() -> HashEngine { HashEngine::new() }

    /// Creates a `Hash` from an `engine`, padding whatever input it still buffers.
    pub fn from_engine(e: HashEngine) -> Self { from_engine(e) }

    /// Copies a byte slice into a hash object.
    pub fn from_slice(sl: &[u8]) -> Result<Self, FromSliceError> {
        if sl.len() != Self::LEN {
            Err(FromSliceError { expected: Self::LEN, got: sl.len() })
        } else {
            let mut ret = [0; 32];
            ret.copy_from_slice(sl);
            Ok(Self::from_byte_array(ret))
        }
    }

    /// Constructs a hash from the underlying byte array.
    pub const fn from_byte_array(bytes: [u8; 32]) -> Self { Self(bytes) }

    /// Returns the underlying byte array.
    pub const fn to_byte_array(self) -> [u8; 32] { self.0 }

    /// Returns a reference to the underlying byte array.
    pub const fn as_byte_array(&self) -> &[u8; 32] { &self.0 }

    /// Returns a reference to the underlying byte array as a slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    /// Computes hash from `bytes` in `const` context.
    ///
    /// Unlike the engine this works out the length of the padded message up front and walks the
    /// whole input in one go. It exists as a reference for the streaming engine and for use in
    /// `const` context.
    ///
    /// Warning: this function is inefficient. It should be only used in `const` context.
    pub const fn hash_unoptimized(bytes: &[u8]) -> Self {
        let mut state = INITIAL_STATE;
        let bit_len = (bytes.len() as u64 * 8).to_be_bytes();
        let num_blocks = (bytes.len() + MIN_PADDING + BLOCK_SIZE - 1) / BLOCK_SIZE;

        let mut block = 0;
        while block < num_blocks {
            let mut buf = [0u8; BLOCK_SIZE];
            let offset = block * BLOCK_SIZE;
            let mut i = 0;
            while i < BLOCK_SIZE {
                if offset + i < bytes.len() {
                    buf[i] = bytes[offset + i];
                } else if offset + i == bytes.len() {
                    buf[i] = 0x80;
                }
                i += 1;
            }
            if block + 1 == num_blocks {
                let mut j = 0;
                while j < 8 {
                    buf[BLOCK_SIZE - 8 + j] = bit_len[j];
                    j += 1;
                }
            }
            state = compress(state, &buf);
            block += 1;
        }
        Hash(crypto::state_to_bytes(state))
    }
}

fn from_engine(mut e: HashEngine) -> Hash {
    // account for the bytes still sitting in the buffer
    e.bits_hashed += 8 * e.fill as u64;

    e.buffer[e.fill] = 0x80;
    for byte in &mut e.buffer[e.fill + 1..] {
        *byte = 0;
    }
    // no room left for the length field, it goes into an extra all-padding block
    if e.fill > BLOCK_SIZE - MIN_PADDING {
        e.h = compress(e.h, &e.buffer);
        e.buffer = [0; BLOCK_SIZE];
    }
    e.buffer[BLOCK_SIZE - 8..].copy_from_slice(&e.bits_hashed.to_be_bytes());
    e.h = compress(e.h, &e.buffer);

    Hash(crypto::state_to_bytes(e.h))
}

/// Engine to compute SHA256 hash function.
///
/// Owns the running hash state, the partially filled block and the count of message bits in
/// every block compressed so far. Engines share nothing, hash independent messages on
/// independent engines.
#[derive(Debug, Clone)]
pub struct HashEngine {
    h: [u32; 8],
    buffer: [u8; BLOCK_SIZE],
    // INVARIANT: always less than `BLOCK_SIZE`, a full buffer is compressed immediately.
    fill: usize,
    bits_hashed: u64,
}

impl HashEngine {
    /// Constructs a new SHA256 hash engine.
    pub const fn new() -> Self {
        Self { h: INITIAL_STATE, buffer: [0; BLOCK_SIZE], fill: 0, bits_hashed: 0 }
    }

    /// Returns the number of bytes buffered and waiting for the block to fill up.
    pub const fn buffered_len(&self) -> usize { self.fill }
}

impl Default for HashEngine {
    fn default() -> Self { Self::new() }
}

impl crate::HashEngine for HashEngine {
    type Hash = Hash;
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn input(&mut self, mut inp: &[u8]) {
        while !inp.is_empty() {
            let write_len = cmp::min(BLOCK_SIZE - self.fill, inp.len());

            self.buffer[self.fill..self.fill + write_len].copy_from_slice(&inp[..write_len]);
            self.fill += write_len;
            if self.fill == BLOCK_SIZE {
                self.h = compress(self.h, &self.buffer);
                self.bits_hashed += 8 * BLOCK_SIZE as u64;
                self.fill = 0;
            }
            inp = &inp[write_len..];
        }
    }

    fn n_bytes_hashed(&self) -> u64 { self.bits_hashed / 8 + self.fill as u64 }

    fn finalize(self) -> Self::Hash { Hash::from_engine(self) }
}

/// Hashes everything `reader` yields until end-of-input.
///
/// Reads in fixed-size chunks, so memory use is bounded regardless of how much the reader
/// produces. Interrupted reads are retried, any other read error is returned.
#[cfg(feature = "std")]
pub fn hash_reader<R: io::Read>(mut reader: R) -> io::Result<Hash> {
    let mut engine = HashEngine::new();
    io::copy(&mut reader, &mut engine)?;
    Ok(engine.finalize())
}

impl fmt::LowerHex for Hash {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.as_bytes().as_hex(), f)
    }
}

impl fmt::UpperHex for Hash {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.as_bytes().as_hex(), f)
    }
}

impl fmt::Display for Hash {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

impl fmt::Debug for Hash {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

impl str::FromStr for Hash {
    type Err = HexToArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = <[u8; 32]>::from_hex(s)?;
        Ok(Self::from_byte_array(bytes))
    }
}

impl<I: core::slice::SliceIndex<[u8]>> ops::Index<I> for Hash {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output { &self.0[index] }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] { &self.0 }
}

impl AsRef<[u8; 32]> for Hash {
    fn as_ref(&self) -> &[u8; 32] { &self.0 }
}

impl borrow::Borrow<[u8]> for Hash {
    fn borrow(&self) -> &[u8] { &self.0 }
}

impl From<Hash> for [u8; 32] {
    fn from(hash: Hash) -> Self { hash.0 }
}

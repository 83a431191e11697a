// SPDX-License-Identifier: CC0-1.0

//! Test the API surface of `sha256_hashes`.
//!
//! The point of these tests is to check the API surface as opposed to test the API functionality.
//!
//! ref: <https://rust-lang.github.io/api-guidelines/about.html>

#![allow(dead_code)]
#![allow(unused_imports)]
// Exclude lints we don't think are valuable.
#![allow(clippy::uninlined_format_args)] // Allow `format!("{}", x)` instead of enforcing `format!("{x}")`

// Import using module style e.g., `sha256::Hash`.
use sha256_hashes::{error, sha256, FromSliceError, HashEngine};
// Import using type alias style e.g., `Sha256`.
use sha256_hashes::Sha256;

/// The digest type.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)] // C-COMMON-TRAITS
#[derive(Debug)] // All public types implement Debug (C-DEBUG).
struct Hashes {
    a: sha256::Hash,
    b: Sha256,
}

impl Hashes {
    fn new() -> Self { Self { a: sha256::Hash::hash(&[]), b: Sha256::hash(b"abc") } }
}

/// The hash engine.
#[derive(Clone, Default)] // C-COMMON-TRAITS
#[derive(Debug)] // All public types implement Debug (C-DEBUG).
struct Engines {
    a: sha256::HashEngine,
}

/// A struct that includes all public error types.
#[derive(Debug, Clone, PartialEq, Eq)] // All public types implement Debug (C-DEBUG).
struct Errors {
    a: FromSliceError,
    b: error::HexToArrayError,
}

impl Errors {
    fn new() -> Self {
        Self {
            a: sha256::Hash::from_slice(&[]).unwrap_err(),
            b: "not hex".parse::<sha256::Hash>().unwrap_err(),
        }
    }
}

#[test]
fn api_can_use_items_from_crate_root() {
    use sha256_hashes::{hex, HashEngine, Sha256};
}

#[test]
fn api_can_use_items_from_module() {
    use sha256_hashes::sha256::{
        compress, Hash, HashEngine, BLOCK_SIZE, INITIAL_STATE, ROUND_CONSTANTS,
    };
    #[cfg(feature = "std")]
    use sha256_hashes::sha256::hash_reader;
}

// `Debug` representation is never empty (C-DEBUG-NONEMPTY).
#[test]
fn api_all_types_have_non_empty_debug() {
    macro_rules! check_debug {
        ($t:tt; $($field:tt),* $(,)?) => {
            $(
                let debug = format!("{:?}", $t.$field);
                assert!(!debug.is_empty());
            )*
        }
    }

    let t = Hashes::new();
    check_debug!(t; a, b);

    let t = Engines::default();
    check_debug!(t; a);

    let t = Errors::new();
    check_debug!(t; a, b);
}

#[test]
fn api_errors_display() {
    let t = Errors::new();
    assert!(!t.a.to_string().is_empty());
    assert!(!t.b.to_string().is_empty());
}

#[test]
#[cfg(feature = "std")]
fn api_errors_are_std_errors() {
    fn assert_error<T: std::error::Error + 'static>() {}

    assert_error::<FromSliceError>();
    assert_error::<error::HexToArrayError>();
}

#[test]
fn all_types_implement_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    //  Types are `Send` and `Sync` where possible (C-SEND-SYNC).
    assert_send::<Hashes>();
    assert_sync::<Hashes>();
    assert_send::<Engines>();
    assert_sync::<Engines>();

    // Error types should implement the Send and Sync traits (C-GOOD-ERR).
    assert_send::<Errors>();
    assert_sync::<Errors>();
}

#[test]
fn engine_trait_is_usable_generically() {
    fn hash_twice<E: HashEngine>(data: &[u8]) -> (E::Hash, u64) {
        let mut engine = E::default();
        engine.input(data);
        engine.input(data);
        let len = engine.n_bytes_hashed();
        (engine.finalize(), len)
    }

    let (hash, len) = hash_twice::<sha256::HashEngine>(b"ab");
    assert_eq!(len, 4);
    assert_eq!(hash, sha256::Hash::hash(b"abab"));
}

// SPDX-License-Identifier: CC0-1.0

//! Byte sources named on the command line.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use hashes::sha256;
use tracing::debug;

use crate::error::Error;

/// Name printed for standard input.
pub const STDIN_NAME: &str = "-";

/// Somewhere to read a message from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A file, by the path given on the command line.
    File(PathBuf),
}

impl Source {
    /// Maps command line arguments to sources.
    ///
    /// No arguments means standard input, as does an argument of `-`.
    pub fn from_args(files: &[PathBuf]) -> Vec<Source> {
        if files.is_empty() {
            return vec![Source::Stdin];
        }
        files
            .iter()
            .map(|path| {
                if path.as_os_str() == STDIN_NAME {
                    Source::Stdin
                } else {
                    Source::File(path.clone())
                }
            })
            .collect()
    }

    /// The name to print next to the digest.
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Source::Stdin => Cow::Borrowed(STDIN_NAME),
            Source::File(path) => path.to_string_lossy(),
        }
    }

    /// Opens the source for reading.
    pub fn open(&self) -> Result<Box<dyn Read>, Error> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin().lock())),
            Source::File(path) => {
                let file = File::open(path)
                    .map_err(|source| Error::Open { name: self.name().into_owned(), source })?;
                Ok(Box::new(file))
            }
        }
    }

    /// Reads the whole source through a fresh engine.
    pub fn digest(&self) -> Result<sha256::Hash, Error> {
        let reader = self.open()?;
        debug!(source = %self.name(), "hashing");
        sha256::hash_reader(reader)
            .map_err(|source| Error::Read { name: self.name().into_owned(), source })
    }
}

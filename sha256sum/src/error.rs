// SPDX-License-Identifier: CC0-1.0

//! Per-source errors.

use std::{error, fmt, io};

/// A byte source that could not be hashed.
///
/// Both variants are local to one source; the run carries on with the next one.
#[derive(Debug)]
pub enum Error {
    /// The source could not be opened.
    Open {
        /// The source name as given on the command line.
        name: String,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The source was opened but reading it failed part way.
    Read {
        /// The source name as given on the command line.
        name: String,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl Error {
    /// Returns the underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Error::Open { source, .. } | Error::Read { source, .. } => source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Open { name, .. } => write!(f, "failed to open {}", name),
            Error::Read { name, .. } => write!(f, "failed to read {}", name),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> { Some(self.io_error()) }
}

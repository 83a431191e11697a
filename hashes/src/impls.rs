// SPDX-License-Identifier: CC0-1.0

//! Implementations of traits defined in `std` and not in `core`.

use std::io;

use crate::{sha256, HashEngine as _};

impl io::Write for sha256::HashEngine {
    fn flush(&mut self) -> io::Result<()> { Ok(()) }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.input(buf);
        Ok(buf.len())
    }
}

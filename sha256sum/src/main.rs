// SPDX-License-Identifier: CC0-1.0

//! sha256sum: print the SHA-256 digest of files or standard input.
//!
//! For every source one line `<hex digest>  <name>` goes to stdout, in argument order. With no
//! arguments, or for an argument of `-`, standard input is hashed and named `-`.
//!
//! A source that cannot be opened or read is reported on stderr and skipped; the remaining
//! sources are still hashed and the process exits with status 1.
//!
//! # Hints and tips
//!
//! - Use `--debug` to see which sources are being hashed.
//!
//! - Logging is filtered through `RUST_LOG`, which takes precedence over `--debug`.

mod error;
mod source;

use std::io::{self, IsTerminal as _, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::source::Source;

/// Print SHA-256 digests.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Files to hash. With no FILE, or when FILE is -, read standard input.
    #[clap(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Turn on debug output.
    #[clap(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    let sources = Source::from_args(&args.files);
    if sources.iter().any(|s| *s == Source::Stdin) {
        debug!("using stdin");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for source in &sources {
        match source.digest() {
            Ok(hash) => {
                if let Err(e) = writeln!(out, "{}  {}", hash, source.name()) {
                    error!(cause = %e, "failed to write to stdout");
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                error!(cause = %e.io_error(), "{}", e);
                failed = true;
            }
        }
    }

    if let Err(e) = out.flush() {
        error!(cause = %e, "failed to write to stdout");
        return ExitCode::FAILURE;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Sends log output to stderr, at `warn` level unless `debug` is set or `RUST_LOG` says otherwise.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

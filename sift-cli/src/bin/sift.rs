//! Line filter over standard input: prints `ACCEPTED` for lines in the
//! balanced-`a`/`b` language and `REJECTED` for everything else. Takes no
//! flags; `RUST_LOG` controls log verbosity on standard error.

use std::io::{self, BufRead, Write};

use sift_cli::error::DriverError;
use sift_cli::grammar::balanced_ab;
use sift_core::valid;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DriverError> {
    let grammar = balanced_ab();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let symbols: Vec<char> = line.chars().collect();
        let accepted = valid(&grammar, &symbols);
        debug!(len = symbols.len(), accepted, "checked line");
        writeln!(out, "{}", if accepted { "ACCEPTED" } else { "REJECTED" })?;
    }

    Ok(())
}

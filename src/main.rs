//! hello_world — prints `Hello, World!` and exits.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};

use calculator::env::Env;
use calculator::{greeting, logging};

fn main() {
    if let Err(err) = logging::init(&Env::real()) {
        eprintln!("Warning: {err}");
    }

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    greeting::write_greeting(&mut handle).context("failed to write greeting to stdout")?;
    handle.flush().context("failed to flush stdout")?;
    tracing::debug!("greeting written");
    Ok(())
}

//! Unitconv interactive converter
//!
//! Reads menu selections, unit indices and values from stdin, one per line,
//! and writes menus and results to stdout. Logs go to stderr.

use std::io;
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "unitconv started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match unitconv_cli::run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "console I/O failed");
            ExitCode::FAILURE
        }
    }
}

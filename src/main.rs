//! Interactive Fetch console on stdin/stdout.
//!
//! Runs the interpreter against simulated pins; pass `-d` to see
//! debug diagnostics.

use std::io::{self, BufRead, Write};

use fetch_console::{messages, Fetch, HostPins};

/// Adapts stdout to the `core::fmt::Write` stream the interpreter
/// writes responses to.
struct StdoutWriter;

impl core::fmt::Write for StdoutWriter {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        print!("{s}");
        Ok(())
    }
}

fn main() {
    if std::env::args().any(|arg| arg == "-d" || arg == "--debug") {
        messages::set_debug(true);
    }

    let mut fetch = Fetch::new(HostPins::new());
    let mut out = StdoutWriter;

    println!("fetch {} (simulated pins)", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("fetch> ");
        let _ = io::stdout().flush();

        match lines.next() {
            Some(Ok(line)) => {
                fetch.run_line(&line, &mut out);
            }
            _ => break,
        }
    }
}

//! Interpreter context

use core::fmt::Write;

use crate::hal::Gpio;
use crate::messages;

use super::commands::dispatch;
use super::tokenizer::parse_line;

/// Interpreter context owning the pin capability.
///
/// Constructed once at startup. One line is parsed and fully
/// dispatched before the next is accepted; nothing suspends
/// mid-statement.
pub struct Fetch<G> {
    gpio: G,
}

impl<G: Gpio> Fetch<G> {
    /// Create an interpreter over a pin capability.
    pub fn new(gpio: G) -> Self {
        Self { gpio }
    }

    /// Access the pin capability.
    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    /// Mutable access to the pin capability.
    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    /// Parse and dispatch one input line. Returns true on success.
    ///
    /// A failed statement is reported on `out` and dropped; the
    /// interpreter stays usable for the next line.
    pub fn run_line(&mut self, line: &str, out: &mut dyn Write) -> bool {
        let statement = match parse_line(line) {
            Ok(statement) => statement,
            Err(err) => {
                messages::error_msg(out, err);
                return false;
            }
        };

        match dispatch(&mut self.gpio, &statement, out) {
            Ok(()) => true,
            Err(err) => {
                messages::error_msg(out, err);
                false
            }
        }
    }
}

//! GPIO command handler
//!
//! Validates the action/port/pin[/direction/sense] sub-token sequence,
//! then calls into the pin capability. Every required token must
//! validate before the first hardware call; an unmapped direction or
//! sense is an error, never a default mode.

use core::fmt::Write;

use crate::hal::{Gpio, PinDirection, PinMode, PinSense, Port};

use super::error::FetchError;
use super::tokenizer::Statement;
use super::vocab::{self, token_match};

// Command path positions; `gpio` itself is position 0.
const ACTION: usize = 1;
const PORT: usize = 2;
const PIN: usize = 3;
const DIRECTION: usize = 4;
const SENSE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Get,
    Set,
    Clear,
    Configure,
}

fn required<'a>(statement: &Statement<'a>, position: usize) -> Result<&'a str, FetchError> {
    statement
        .commands
        .get(position)
        .copied()
        .ok_or(FetchError::MissingToken)
}

fn action_from(token: &str) -> Result<Action, FetchError> {
    match token_match(vocab::GPIO_ACTIONS, token) {
        Some(0) => Ok(Action::Get),
        Some(1) => Ok(Action::Set),
        Some(2) => Ok(Action::Clear),
        Some(3) => Ok(Action::Configure),
        _ => Err(FetchError::UnrecognizedToken),
    }
}

fn port_from(token: &str) -> Result<Port, FetchError> {
    token_match(vocab::PORTS, token)
        .and_then(Port::from_index)
        .ok_or(FetchError::UnrecognizedToken)
}

/// Pin vocabulary index doubles as the pin number.
fn pin_from(token: &str) -> Result<u8, FetchError> {
    token_match(vocab::PINS, token)
        .map(|index| index as u8)
        .ok_or(FetchError::UnrecognizedToken)
}

fn direction_from(token: &str) -> Result<PinDirection, FetchError> {
    match token_match(vocab::GPIO_DIRECTIONS, token) {
        Some(0) => Ok(PinDirection::Input),
        Some(1) => Ok(PinDirection::Output),
        _ => Err(FetchError::UnrecognizedToken),
    }
}

fn sense_from(token: &str) -> Result<PinSense, FetchError> {
    match token_match(vocab::GPIO_SENSES, token) {
        Some(0) => Ok(PinSense::PullUp),
        Some(1) => Ok(PinSense::PullDown),
        Some(2) => Ok(PinSense::Floating),
        Some(3) => Ok(PinSense::Analog),
        _ => Err(FetchError::UnrecognizedToken),
    }
}

/// Handler for the `gpio` command family.
///
/// `get` answers with the pin level as `0` or `1`; `set`, `clear` and
/// `configure` produce no payload.
pub fn cmd_gpio(
    gpio: &mut dyn Gpio,
    statement: &Statement<'_>,
    out: &mut dyn Write,
) -> Result<(), FetchError> {
    let action = action_from(required(statement, ACTION)?)?;
    let port = port_from(required(statement, PORT)?)?;
    let pin = pin_from(required(statement, PIN)?)?;

    match action {
        Action::Get => {
            let level = gpio.read_pin(port, pin);
            let _ = write!(out, "{}\r\n", u8::from(level));
        }
        Action::Set => gpio.write_pin(port, pin, true),
        Action::Clear => gpio.write_pin(port, pin, false),
        Action::Configure => {
            // Both trailing tokens must map before the pin is touched.
            let direction = direction_from(required(statement, DIRECTION)?)?;
            let sense = sense_from(required(statement, SENSE)?)?;
            gpio.configure_pin(port, pin, PinMode { direction, sense });
        }
    }

    Ok(())
}

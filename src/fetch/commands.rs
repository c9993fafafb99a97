//! Command registry and dispatch

use core::fmt::Write;

use crate::hal::Gpio;
use crate::messages;

use super::error::FetchError;
use super::gpio::cmd_gpio;
use super::tokenizer::{Statement, MAX_DATA_TOKENS};
use super::vocab::{self, token_match};

/// Handler entry point bound to a top-level command.
pub type Handler = fn(&mut dyn Gpio, &Statement<'_>, &mut dyn Write) -> Result<(), FetchError>;

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub enabled: bool,
    pub max_data_bytes: usize,
    pub help: &'static str,
    pub handler: Handler,
}

/// Dispatch table, one entry per [`vocab::COMMANDS`] name, same order.
pub static COMMAND_TABLE: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "?",
        enabled: true,
        max_data_bytes: 0,
        help: "print this help",
        handler: cmd_help,
    },
    CommandDescriptor {
        name: "help",
        enabled: true,
        max_data_bytes: 0,
        help: "print this help",
        handler: cmd_help,
    },
    CommandDescriptor {
        name: "gpio",
        enabled: true,
        max_data_bytes: MAX_DATA_TOKENS,
        help: "gpio:<get|set|clear|configure>:<port>:<pin>[:<direction>:<sense>]",
        handler: cmd_gpio,
    },
    CommandDescriptor {
        name: "adc",
        enabled: true,
        max_data_bytes: 0,
        help: "analog conversion (not implemented)",
        handler: cmd_not_yet,
    },
    CommandDescriptor {
        name: "spi",
        enabled: true,
        max_data_bytes: 0,
        help: "SPI transfer (not implemented)",
        handler: cmd_not_yet,
    },
    CommandDescriptor {
        name: "i2c",
        enabled: true,
        max_data_bytes: 0,
        help: "I2C transfer (not implemented)",
        handler: cmd_not_yet,
    },
    CommandDescriptor {
        name: "resetpins",
        enabled: true,
        max_data_bytes: 0,
        help: "reset every pin to input floating",
        handler: cmd_resetpins,
    },
];

/// Resolve and invoke the handler for a parsed statement.
///
/// An empty statement is a no-op. The handler performs its own
/// sub-token validation; no pin is touched on a validation failure.
pub fn dispatch(
    gpio: &mut dyn Gpio,
    statement: &Statement<'_>,
    out: &mut dyn Write,
) -> Result<(), FetchError> {
    debug_assert_eq!(vocab::COMMANDS.len(), COMMAND_TABLE.len());

    let Some(&name) = statement.commands.first() else {
        return Ok(());
    };

    let index = token_match(vocab::COMMANDS, name).ok_or(FetchError::UnrecognizedCommand)?;
    let descriptor = &COMMAND_TABLE[index];

    if !descriptor.enabled {
        return Err(FetchError::NotImplemented);
    }
    if statement.data.len() > descriptor.max_data_bytes {
        return Err(FetchError::TooManyTokens);
    }

    (descriptor.handler)(gpio, statement, out)
}

// --- Command Implementations ---

fn cmd_help(
    _gpio: &mut dyn Gpio,
    _statement: &Statement<'_>,
    out: &mut dyn Write,
) -> Result<(), FetchError> {
    messages::info_msg(out, "Fetch command help");
    for c in COMMAND_TABLE.iter().filter(|c| c.enabled) {
        let _ = write!(out, "  {:<10} {}\r\n", c.name, c.help);
    }
    let _ = write!(out, "  ports porta..porti, pins pin0..pin15\r\n");
    Ok(())
}

fn cmd_not_yet(
    _gpio: &mut dyn Gpio,
    _statement: &Statement<'_>,
    _out: &mut dyn Write,
) -> Result<(), FetchError> {
    Err(FetchError::NotImplemented)
}

fn cmd_resetpins(
    gpio: &mut dyn Gpio,
    _statement: &Statement<'_>,
    out: &mut dyn Write,
) -> Result<(), FetchError> {
    messages::debug_msg(out, "resetting pins");
    gpio.reset_all_pins();
    Ok(())
}

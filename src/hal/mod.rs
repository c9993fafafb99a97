//! Hardware capability layer
//!
//! The interpreter core never touches pads directly; it goes through
//! the [`Gpio`] trait. Targets implement it over their pad layer,
//! hosts and tests use the in-memory [`HostPins`] table.

pub mod gpio;
pub mod host;

pub use gpio::{Gpio, PinDirection, PinMode, PinSense, Port, PINS_PER_PORT, PORT_COUNT};
pub use host::HostPins;

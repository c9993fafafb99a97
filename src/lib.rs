//! # fetch-console
//!
//! Line-oriented command interpreter for embedded pin control.
//!
//! One ASCII line in, one response out:
//!
//! ```text
//! gpio:set:portd:pin7
//! gpio:configure:portd:pin7:input:floating
//! gpio:set:porta:pin3(01 02 0a)
//! ```
//!
//! A line is tokenized into a colon-separated command path plus an
//! optional parenthesized data payload, validated against fixed
//! vocabularies and dispatched through a static command table. Pin
//! access goes through the [`hal::Gpio`] capability; targets plug in
//! their own implementation, hosts use [`hal::HostPins`].
//!
//! Zero heap allocation - token lists are bounded [`heapless`] vectors
//! borrowing from the caller's line buffer.

#![cfg_attr(not(test), no_std)]

pub mod fetch;
pub mod hal;
pub mod messages;

pub use fetch::{dispatch, parse_line, Fetch, FetchError, Statement};
pub use hal::{Gpio, HostPins, PinDirection, PinMode, PinSense, Port};

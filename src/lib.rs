//! Driver for daisy-chained 74HC595 shift registers.
//!
//! Any number of chips share one data line, one shift clock and one latch
//! clock. Master clear and output enable are optional. The chain is backed
//! by a byte buffer with one bit per output. Bits are edited in memory and
//! pushed out with [`ShiftRegisterChain::send`], which latches all outputs
//! at once.
//!
//! ```ignore
//! let pins = Pins::new(data, shift_clock, latch_clock).output_enable(oe);
//! let mut chain = ShiftRegisterChain::new([0u8; 2], pins)?;
//! chain.set(3, true)?;
//! chain.send()?;
//! chain.enable()?;
//! ```
#![cfg_attr(not(test), no_std)]

mod chain;
mod error;
#[cfg(test)]
mod mock;
mod shift;

pub use chain::{Pins, ShiftRegisterChain};
pub use error::Error;
pub use shift::{BitOrder, ShiftRegister};

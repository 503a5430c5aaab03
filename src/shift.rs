use embedded_hal::digital::v2::OutputPin;

use crate::Error;

/// The three lines every '595 needs: serial data, shift clock (SRCLK) and
/// latch clock (RCLK).
pub struct ShiftRegister<P> {
    pub sdata_pin: P,
    pub clock_pin: P,
    pub latch_pin: P,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitOrder {
    MstSigFirst,
    LstSigFirst,
}

impl<P: OutputPin> ShiftRegister<P> {
    /// Drive both clocks to their idle (low) level.
    pub fn idle(&mut self) -> Result<(), Error<P::Error>> {
        self.clock_pin.set_low().map_err(Error::Pin)?;
        self.latch_pin.set_low().map_err(Error::Pin)
    }

    /// Shift one byte into the chain. The outputs do not change until
    /// [`latch`](Self::latch).
    pub fn shift_out(&mut self, byte: u8, bitorder: BitOrder) -> Result<(), Error<P::Error>> {
        for i in 0..8 {
            let bit = match bitorder {
                BitOrder::MstSigFirst => (byte >> (7 - i)) & 1,
                BitOrder::LstSigFirst => (byte >> i) & 1,
            };
            let written = match bit {
                0 => self.sdata_pin.set_low(),
                _ => self.sdata_pin.set_high(),
            };
            written.map_err(Error::Pin)?;

            // data is sampled on the rising edge
            self.clock_pin.set_high().map_err(Error::Pin)?;
            self.clock_pin.set_low().map_err(Error::Pin)?;
        }
        Ok(())
    }

    /// Copy the shift stages of every chip into their output registers at once.
    pub fn latch(&mut self) -> Result<(), Error<P::Error>> {
        self.latch_pin.set_high().map_err(Error::Pin)?;
        self.latch_pin.set_low().map_err(Error::Pin)
    }
}

use embedded_hal::digital::v2::OutputPin;

use crate::shift::{BitOrder, ShiftRegister};
use crate::Error;

/// Control lines of a chain. Data, shift clock and latch clock are
/// mandatory, master clear and output enable are not.
pub struct Pins<P> {
    pub data: P,
    pub shift_clock: P,
    pub latch_clock: P,
    pub clear: Option<P>,
    pub output_enable: Option<P>,
}

impl<P> Pins<P> {
    pub fn new(data: P, shift_clock: P, latch_clock: P) -> Self {
        Pins {
            data,
            shift_clock,
            latch_clock,
            clear: None,
            output_enable: None,
        }
    }

    /// Add the active-low master clear line (SRCLR).
    pub fn clear(mut self, pin: P) -> Self {
        self.clear = Some(pin);
        self
    }

    /// Add the active-low output enable line (OE).
    pub fn output_enable(mut self, pin: P) -> Self {
        self.output_enable = Some(pin);
        self
    }
}

/// A daisy chain of '595 chips backed by one bit per output.
///
/// Bit `i` lives in byte `i / 8` under mask `0x80 >> (i % 8)`. Bytes go out
/// in order and MSB first, so byte 0 ends up in the chip furthest from the
/// host and bit 0 is the first bit on the wire.
///
/// `set`, `get` and `clear` work on the buffer; nothing reaches the outputs
/// before [`send`](Self::send) or [`clear`](Self::clear) latches it.
pub struct ShiftRegisterChain<B, P> {
    buffer: B,
    register: ShiftRegister<P>,
    clear: Option<P>,
    output_enable: Option<P>,
}

impl<B, P> ShiftRegisterChain<B, P>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    P: OutputPin,
{
    /// Take over `pins` and bring them to a safe state: outputs disabled,
    /// clear released, both clocks idle. The buffer is kept as given and
    /// nothing is shifted out.
    pub fn new(buffer: B, pins: Pins<P>) -> Result<Self, Error<P::Error>> {
        let Pins {
            data,
            shift_clock,
            latch_clock,
            mut clear,
            mut output_enable,
        } = pins;

        if let Some(oe) = output_enable.as_mut() {
            oe.set_high().map_err(Error::Pin)?;
        }
        if let Some(clr) = clear.as_mut() {
            clr.set_high().map_err(Error::Pin)?;
        }

        let mut register = ShiftRegister {
            sdata_pin: data,
            clock_pin: shift_clock,
            latch_pin: latch_clock,
        };
        register.idle()?;

        Ok(ShiftRegisterChain {
            buffer,
            register,
            clear,
            output_enable,
        })
    }

    /// Length of the buffer in bytes, i.e. the number of chips.
    pub fn len(&self) -> usize {
        self.buffer.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of addressable outputs.
    pub fn bits(&self) -> usize {
        self.len() * 8
    }

    pub fn has_clear(&self) -> bool {
        self.clear.is_some()
    }

    pub fn has_output_enable(&self) -> bool {
        self.output_enable.is_some()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Raw buffer access for writing whole chips at a time.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }

    fn locate(&self, index: usize) -> Result<(usize, u8), Error<P::Error>> {
        let byte = index / 8;
        if byte >= self.len() {
            return Err(Error::OutOfRange {
                index,
                bits: self.bits(),
            });
        }
        Ok((byte, 0x80 >> (index % 8)))
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<(), Error<P::Error>> {
        let (byte, mask) = self.locate(index)?;
        let slot = &mut self.buffer.as_mut()[byte];
        if value {
            *slot |= mask;
        } else {
            *slot &= !mask;
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<bool, Error<P::Error>> {
        let (byte, mask) = self.locate(index)?;
        Ok(self.buffer.as_ref()[byte] & mask != 0)
    }

    /// Shift the whole buffer into the chain and latch it, so all outputs
    /// change together.
    pub fn send(&mut self) -> Result<(), Error<P::Error>> {
        for &byte in self.buffer.as_ref() {
            self.register.shift_out(byte, BitOrder::MstSigFirst)?;
        }
        self.register.latch()
    }

    /// Zero the buffer and the outputs. Uses the clear line when there is
    /// one, otherwise shifts the zeroed buffer out.
    pub fn clear(&mut self) -> Result<(), Error<P::Error>> {
        self.buffer.as_mut().fill(0);

        match self.clear.as_mut() {
            Some(clr) => {
                clr.set_low().map_err(Error::Pin)?;
                clr.set_high().map_err(Error::Pin)?;
                self.register.latch()
            }
            None => self.send(),
        }
    }

    /// Connect the output registers to the pins.
    pub fn enable(&mut self) -> Result<(), Error<P::Error>> {
        let oe = self.output_enable.as_mut().ok_or(Error::NoOutputEnable)?;
        oe.set_low().map_err(Error::Pin)
    }

    /// Put every output into high impedance. The chain keeps its contents.
    pub fn disable(&mut self) -> Result<(), Error<P::Error>> {
        let oe = self.output_enable.as_mut().ok_or(Error::NoOutputEnable)?;
        oe.set_high().map_err(Error::Pin)
    }

    /// Give back the buffer and the pins, in whatever state they were left.
    pub fn release(self) -> (B, Pins<P>) {
        let ShiftRegister {
            sdata_pin,
            clock_pin,
            latch_pin,
        } = self.register;
        let pins = Pins {
            data: sdata_pin,
            shift_clock: clock_pin,
            latch_clock: latch_pin,
            clear: self.clear,
            output_enable: self.output_enable,
        };
        (self.buffer, pins)
    }
}

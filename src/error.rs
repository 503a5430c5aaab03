use core::fmt;

/// Errors reported by [`ShiftRegisterChain`](crate::ShiftRegisterChain) and
/// [`ShiftRegister`](crate::ShiftRegister).
///
/// `E` is the error type of the output pins. Boards with infallible pins
/// (most of them) use `core::convert::Infallible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Bit index is not below the number of outputs in the chain.
    OutOfRange { index: usize, bits: usize },
    /// The chain was built without an output enable line.
    NoOutputEnable,
    /// Writing a control line failed.
    Pin(E),
}

impl<E> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { index, bits } => {
                write!(f, "bit {} out of range, chain has {} outputs", index, bits)
            }
            Error::NoOutputEnable => f.write_str("no output enable line configured"),
            Error::Pin(_) => f.write_str("control line write failed"),
        }
    }
}

// Firmware prints through ufmt to stay clear of core::fmt.
impl<E> ufmt::uDisplay for Error<E> {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        match self {
            Error::OutOfRange { index, bits } => {
                ufmt::uwrite!(f, "bit {} out of range, chain has {} outputs", *index, *bits)
            }
            Error::NoOutputEnable => f.write_str("no output enable line configured"),
            Error::Pin(_) => f.write_str("control line write failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use core::convert::Infallible;

    struct Text(String);

    impl ufmt::uWrite for Text {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn display_matches_udisplay() {
        let errors: [Error<Infallible>; 2] = [
            Error::OutOfRange { index: 40, bits: 16 },
            Error::NoOutputEnable,
        ];
        for e in errors.iter() {
            let mut text = Text(String::new());
            ufmt::uwrite!(&mut text, "{}", e).unwrap();
            assert_eq!(text.0, e.to_string());
        }
    }

    #[test]
    fn out_of_range_message() {
        let e: Error<()> = Error::OutOfRange { index: 40, bits: 16 };
        assert_eq!(e.to_string(), "bit 40 out of range, chain has 16 outputs");
    }
}

//! Recording pins for the unit tests.

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::v2::OutputPin;

pub const DATA: u8 = 2;
pub const SHIFT_CLOCK: u8 = 3;
pub const LATCH_CLOCK: u8 = 4;
pub const CLEAR: u8 = 5;
pub const OUTPUT_ENABLE: u8 = 6;

/// Every level written to any pin that shares this journal, in order.
pub type Journal = Rc<RefCell<Vec<(u8, bool)>>>;

pub struct MockPin {
    line: u8,
    journal: Journal,
}

impl MockPin {
    pub fn new(line: u8, journal: &Journal) -> Self {
        MockPin {
            line,
            journal: journal.clone(),
        }
    }
}

impl OutputPin for MockPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.journal.borrow_mut().push((self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.journal.borrow_mut().push((self.line, true));
        Ok(())
    }
}

/// Pin that fails every write after `budget` successful ones.
pub struct FlakyPin {
    budget: usize,
}

impl FlakyPin {
    pub fn new(budget: usize) -> Self {
        FlakyPin { budget }
    }

    fn write(&mut self) -> Result<(), &'static str> {
        match self.budget.checked_sub(1) {
            Some(left) => {
                self.budget = left;
                Ok(())
            }
            None => Err("bus fault"),
        }
    }
}

impl OutputPin for FlakyPin {
    type Error = &'static str;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write()
    }
}

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Writes to one line only, dropping the others.
pub fn writes_to(journal: &Journal, line: u8) -> Vec<bool> {
    journal
        .borrow()
        .iter()
        .filter(|(l, _)| *l == line)
        .map(|(_, level)| *level)
        .collect()
}

#![no_std]
#![no_main]
use panic_halt as _;

use arduino_hal::pac::USART0;
use arduino_hal::port::{mode, Pin};
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial::Read;
use hc595_chain::{Error, Pins, ShiftRegisterChain};

/// Number of '595 chips on the board.
const CHIPS: usize = 2;
/// Time each output stays lit while chasing.
const STEP_MS: u16 = 150;

type Serial = arduino_hal::hal::usart::Usart<
    USART0,
    Pin<mode::Input, arduino_hal::hal::port::PD0>,
    Pin<mode::Output, arduino_hal::hal::port::PD1>,
    arduino_hal::clock::MHz16,
>;
type Chain = ShiftRegisterChain<[u8; CHIPS], Pin<mode::Output>>;

enum Command {
    NoOp,
    Enable,
    Disable,
    Clear,
    Resume,
    Print,
}

impl Command {
    fn from_u8(value: u8) -> Command {
        match value {
            b'e' => Command::Enable,
            b'd' => Command::Disable,
            b'c' => Command::Clear,
            b'r' => Command::Resume,
            b'p' => Command::Print,
            _ => Command::NoOp,
        }
    }
}

fn report<E>(serial: &mut Serial, result: Result<(), Error<E>>) {
    if let Err(e) = result {
        ufmt::uwriteln!(&mut *serial, "error: {}\r", e).ok();
    }
}

fn print_buffer(chain: &Chain, serial: &mut Serial) {
    ufmt::uwrite!(&mut *serial, "buffer:").ok();
    for b in chain.as_bytes() {
        ufmt::uwrite!(&mut *serial, " {}", *b).ok();
    }
    ufmt::uwriteln!(&mut *serial, "\r").ok();
}

/// Light exactly one output.
fn chase_step<P: OutputPin>(
    chain: &mut ShiftRegisterChain<[u8; CHIPS], P>,
    position: usize,
) -> Result<(), Error<P::Error>> {
    chain.as_bytes_mut().fill(0);
    chain.set(position, true)?;
    chain.send()
}

#[arduino_hal::entry]
fn main() -> ! {
    let peripherals = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(peripherals);
    let mut serial = arduino_hal::default_serial!(peripherals, pins, 57600);

    let control = Pins::new(
        pins.d2.into_output().downgrade(),
        pins.d3.into_output().downgrade(),
        pins.d4.into_output().downgrade(),
    )
    .clear(pins.d5.into_output().downgrade())
    .output_enable(pins.d6.into_output().downgrade());

    let mut chain: Chain = match ShiftRegisterChain::new([0u8; CHIPS], control) {
        Ok(chain) => chain,
        Err(e) => {
            ufmt::uwriteln!(&mut serial, "chain setup failed: {}\r", e).ok();
            loop {}
        }
    };

    ufmt::uwriteln!(&mut serial, "hc595 chain demo, {} outputs\r", chain.bits()).ok();
    let started = chain.clear().and_then(|_| chain.enable());
    report(&mut serial, started);

    let mut position = 0;
    let mut running = true;
    loop {
        let cmd = match serial.read() {
            Ok(b) => Command::from_u8(b),
            Err(nb::Error::WouldBlock) => Command::NoOp,
            Err(nb::Error::Other(_)) => Command::NoOp,
        };

        match cmd {
            Command::Enable => {
                ufmt::uwriteln!(&mut serial, "outputs on\r").ok();
                let result = chain.enable();
                report(&mut serial, result);
            }
            Command::Disable => {
                ufmt::uwriteln!(&mut serial, "outputs off\r").ok();
                let result = chain.disable();
                report(&mut serial, result);
            }
            Command::Clear => {
                ufmt::uwriteln!(&mut serial, "cleared, 'r' resumes\r").ok();
                running = false;
                let result = chain.clear();
                report(&mut serial, result);
            }
            Command::Resume => {
                ufmt::uwriteln!(&mut serial, "chasing from {}\r", position).ok();
                running = true;
            }
            Command::Print => print_buffer(&chain, &mut serial),
            Command::NoOp => (),
        }

        if running {
            let result = chase_step(&mut chain, position);
            report(&mut serial, result);
            position = (position + 1) % chain.bits();
            arduino_hal::delay_ms(STEP_MS);
        }
    }
}

use avr_device::atmega128a::{PORTA, PORTB, PORTC, PORTD, PORTE, PORTF};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin, ToggleableOutputPin};
use stopwatch_firmware::hal::gpio::{self, Direction, Level, PinId, Port};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

// Binds the output, direction and input registers of `$port` and evaluates
// `$op` against them.
macro_rules! with_port {
    ($port:expr, |$out:ident, $ddr:ident, $inp:ident| $op:expr) => {
        match $port {
            Port::A => {
                let p = unsafe { &*PORTA::ptr() };
                let ($out, $ddr, $inp) = (&p.porta, &p.ddra, &p.pina);
                $op
            }
            Port::B => {
                let p = unsafe { &*PORTB::ptr() };
                let ($out, $ddr, $inp) = (&p.portb, &p.ddrb, &p.pinb);
                $op
            }
            Port::C => {
                let p = unsafe { &*PORTC::ptr() };
                let ($out, $ddr, $inp) = (&p.portc, &p.ddrc, &p.pinc);
                $op
            }
            Port::D => {
                let p = unsafe { &*PORTD::ptr() };
                let ($out, $ddr, $inp) = (&p.portd, &p.ddrd, &p.pind);
                $op
            }
            Port::E => {
                let p = unsafe { &*PORTE::ptr() };
                let ($out, $ddr, $inp) = (&p.porte, &p.ddre, &p.pine);
                $op
            }
            Port::F => {
                let p = unsafe { &*PORTF::ptr() };
                let ($out, $ddr, $inp) = (&p.portf, &p.ddrf, &p.pinf);
                $op
            }
        }
    };
}

/// A pin addressed at runtime by port and bit.
#[derive(Debug)]
pub struct Pin<MODE> {
    id: PinId,
    _mode: PhantomData<MODE>,
}

impl Pin<Input> {
    /// A pin in its reset state: input with the pull-up off.
    pub const fn new(id: PinId) -> Self {
        Self {
            id,
            _mode: PhantomData,
        }
    }
}

impl<MODE: PinMode> Pin<MODE> {
    #[inline]
    pub fn id(&self) -> PinId {
        self.id
    }

    pub fn into_output(self) -> Pin<Output> {
        self.configure(Direction::Output);
        self.with_mode()
    }

    pub fn into_floating_input(self) -> Pin<Input> {
        self.configure(Direction::Input);
        self.drive(Level::Low);
        self.with_mode()
    }

    /// Input with the internal pull-up enabled.
    pub fn into_pull_up_input(self) -> Pin<Input> {
        self.configure(Direction::Input);
        self.drive(Level::High);
        self.with_mode()
    }

    fn with_mode<NEW: PinMode>(self) -> Pin<NEW> {
        Pin {
            id: self.id,
            _mode: PhantomData,
        }
    }

    fn configure(&self, direction: Direction) {
        let bit = self.id.bit;
        with_port!(self.id.port, |_out, ddr, _inp| ddr.modify(|r, w| unsafe {
            w.bits(gpio::configure_bit(r.bits(), bit, direction))
        }));
    }

    // PORTx bit: output level, or pull-up enable on an input.
    fn drive(&self, level: Level) {
        let bit = self.id.bit;
        with_port!(self.id.port, |out, _ddr, _inp| out.modify(|r, w| unsafe {
            w.bits(gpio::write_bit(r.bits(), bit, level))
        }));
    }

    fn sample(&self) -> Level {
        let bit = self.id.bit;
        with_port!(self.id.port, |_out, _ddr, inp| gpio::read_bit(inp.read().bits(), bit))
    }
}

impl OutputPin for Pin<Output> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.drive(Level::High);
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.drive(Level::Low);
        Ok(())
    }
}

impl ToggleableOutputPin for Pin<Output> {
    type Error = Infallible;

    // The ATmega128 has no write-one-to-toggle on PINx.
    fn toggle(&mut self) -> Result<(), Infallible> {
        let bit = self.id.bit;
        with_port!(self.id.port, |out, _ddr, _inp| out.modify(|r, w| unsafe {
            w.bits(gpio::toggle_bit(r.bits(), bit))
        }));
        Ok(())
    }
}

impl InputPin for Pin<Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(self.sample() == Level::High)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(self.sample() == Level::Low)
    }
}

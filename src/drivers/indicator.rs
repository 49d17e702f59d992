use crate::clock::Mode;
use crate::Error;
use embedded_hal::digital::v2::OutputPin;

/// Which pin level turns the load on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    /// Sinking load, lit when the pin is driven low.
    ActiveLow,
}

/// Single-bit actuator: an LED or the buzzer.
pub struct Indicator<P> {
    pin: P,
    polarity: Polarity,
    on: bool,
}

pub type Led<P> = Indicator<P>;
pub type Buzzer<P> = Indicator<P>;

impl<P: OutputPin> Indicator<P> {
    /// Takes the pin and switches the load off.
    pub fn new(pin: P, polarity: Polarity) -> Result<Self, Error> {
        let mut indicator = Self {
            pin,
            polarity,
            on: false,
        };
        indicator.turn_off()?;
        Ok(indicator)
    }

    pub fn turn_on(&mut self) -> Result<(), Error> {
        self.set(true)
    }

    pub fn turn_off(&mut self) -> Result<(), Error> {
        self.set(false)
    }

    pub fn set(&mut self, on: bool) -> Result<(), Error> {
        let high = match self.polarity {
            Polarity::ActiveHigh => on,
            Polarity::ActiveLow => !on,
        };
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| Error::Gpio)?;
        self.on = on;
        Ok(())
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// The two LEDs showing the count direction; exactly one is lit.
pub struct ModeLeds<P> {
    count_up: Led<P>,
    count_down: Led<P>,
}

impl<P: OutputPin> ModeLeds<P> {
    pub fn new(count_up: Led<P>, count_down: Led<P>) -> Self {
        Self {
            count_up,
            count_down,
        }
    }

    pub fn show(&mut self, mode: Mode) -> Result<(), Error> {
        let up = mode == Mode::CountUp;
        self.count_up.set(up)?;
        self.count_down.set(!up)
    }

    pub fn count_up(&self) -> &Led<P> {
        &self.count_up
    }

    pub fn count_down(&self) -> &Led<P> {
        &self.count_down
    }
}

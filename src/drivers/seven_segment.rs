//! Multiplexed six digit seven-segment display.
//!
//! All digits share one 4-bit BCD bus feeding an external decoder; each digit
//! has its own active-high enable line. Only one enable may be on at a time,
//! otherwise two digits show the same bus value.

use crate::clock::{DigitPosition, Time, DIGIT_COUNT};
use crate::config::DIGIT_SETTLE_MS;
use crate::Error;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

/// Width of the BCD data bus.
pub const BUS_WIDTH: usize = 4;

pub struct SevenSegment<P> {
    enables: [P; DIGIT_COUNT],
    bus: [P; BUS_WIDTH],
}

impl<P: OutputPin> SevenSegment<P> {
    /// `enables` are in scan order, `bus` is least significant bit first.
    pub fn new(enables: [P; DIGIT_COUNT], bus: [P; BUS_WIDTH]) -> Result<Self, Error> {
        let mut display = Self { enables, bus };
        display.deselect_all()?;
        display.write_bcd(0)?;
        Ok(display)
    }

    pub fn deselect_all(&mut self) -> Result<(), Error> {
        for pin in self.enables.iter_mut() {
            pin.set_low().map_err(|_| Error::Gpio)?;
        }
        Ok(())
    }

    /// Enables digit `index` and no other. An index past the last digit is ignored.
    pub fn select(&mut self, index: usize) -> Result<(), Error> {
        if index >= DIGIT_COUNT {
            return Ok(());
        }
        for (i, pin) in self.enables.iter_mut().enumerate() {
            let result = if i == index {
                pin.set_high()
            } else {
                pin.set_low()
            };
            result.map_err(|_| Error::Gpio)?;
        }
        Ok(())
    }

    /// Drives the low nibble of `value` onto the bus.
    pub fn write_bcd(&mut self, value: u8) -> Result<(), Error> {
        for (bit, pin) in self.bus.iter_mut().enumerate() {
            let result = if value & (1 << bit) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
            result.map_err(|_| Error::Gpio)?;
        }
        Ok(())
    }

    /// One full scan over all six digits.
    ///
    /// Blocks for `DIGIT_COUNT * DIGIT_SETTLE_MS`; call it on every pass of the
    /// foreground loop.
    pub fn refresh<D: DelayMs<u8>>(&mut self, time: &Time, delay: &mut D) -> Result<(), Error> {
        for position in DigitPosition::ALL {
            self.select(position.index())?;
            self.write_bcd(position.digit(time))?;
            delay.delay_ms(DIGIT_SETTLE_MS);
            self.deselect_all()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::delay::MockNoop;
    use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

    fn set(high: bool) -> PinTransaction {
        PinTransaction::set(if high { PinState::High } else { PinState::Low })
    }

    fn release(enables: &mut [PinMock], bus: &mut [PinMock]) {
        enables.iter_mut().for_each(|pin| pin.done());
        bus.iter_mut().for_each(|pin| pin.done());
    }

    #[test]
    fn refresh_scans_each_digit_exclusively() {
        let time = Time::new(3, 59, 46);
        let digits = time.digits();

        // Construction: every enable low, bus cleared.
        let mut enables: Vec<PinMock> = (0..DIGIT_COUNT)
            .map(|pin| {
                let mut expected = vec![set(false)];
                for scanned in 0..DIGIT_COUNT {
                    expected.push(set(scanned == pin));
                    expected.push(set(false));
                }
                PinMock::new(&expected)
            })
            .collect();
        let mut bus: Vec<PinMock> = (0..BUS_WIDTH)
            .map(|bit| {
                let mut expected = vec![set(false)];
                for digit in digits {
                    expected.push(set(digit & (1 << bit) != 0));
                }
                PinMock::new(&expected)
            })
            .collect();

        let mut display = SevenSegment::new(
            core::array::from_fn(|i| enables[i].clone()),
            core::array::from_fn(|i| bus[i].clone()),
        )
        .unwrap();
        display.refresh(&time, &mut MockNoop::new()).unwrap();

        release(&mut enables, &mut bus);
    }

    #[test]
    fn select_out_of_range_is_a_no_op() {
        let mut enables: Vec<PinMock> = (0..DIGIT_COUNT).map(|_| PinMock::new(&[set(false)])).collect();
        let mut bus: Vec<PinMock> = (0..BUS_WIDTH).map(|_| PinMock::new(&[set(false)])).collect();

        let mut display = SevenSegment::new(
            core::array::from_fn(|i| enables[i].clone()),
            core::array::from_fn(|i| bus[i].clone()),
        )
        .unwrap();
        display.select(DIGIT_COUNT).unwrap();
        display.select(usize::MAX).unwrap();

        release(&mut enables, &mut bus);
    }

    #[test]
    fn bcd_uses_low_nibble() {
        let mut enables: Vec<PinMock> = (0..DIGIT_COUNT).map(|_| PinMock::new(&[set(false)])).collect();
        // 0b1001 (9), high nibble of 0xF9 dropped.
        let levels = [true, false, false, true];
        let mut bus: Vec<PinMock> = levels
            .iter()
            .map(|&high| PinMock::new(&[set(false), set(high)]))
            .collect();

        let mut display = SevenSegment::new(
            core::array::from_fn(|i| enables[i].clone()),
            core::array::from_fn(|i| bus[i].clone()),
        )
        .unwrap();
        display.write_bcd(0xF9).unwrap();

        release(&mut enables, &mut bus);
    }
}

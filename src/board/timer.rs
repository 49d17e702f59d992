//! Timer/Counter1 as the stopwatch tick source.

use avr_device::atmega128a::TC1;
use stopwatch_firmware::hal::timer::{Prescaler, TickRate, TickSource};

/// TCCR1B: clear on compare match with OCR1A.
const WGM12: u8 = 1 << 3;
/// TIMSK: compare match A interrupt enable.
const OCIE1A: u8 = 1 << 4;
/// TIFR: compare match A flag, cleared by writing one.
const OCF1A: u8 = 1 << 4;

/// Compare-match tick on TC1 channel A.
///
/// Disarming only stops the clock, so the counter keeps the partial second and
/// resuming carries on from it.
pub struct CompareTimer {
    armed: bool,
}

impl CompareTimer {
    pub const fn new() -> Self {
        Self { armed: false }
    }
}

impl TickSource for CompareTimer {
    fn arm(&mut self, rate: TickRate) {
        unsafe {
            let p = &*TC1::ptr();
            p.tccr1a.write(|w| w.bits(0));
            p.ocr1a.write(|w| w.bits(rate.compare));
            p.timsk.modify(|r, w| w.bits(r.bits() | OCIE1A));
            p.tccr1b.write(|w| w.bits(WGM12 | (rate.prescaler.bits() & Prescaler::MASK)));
        }
        self.armed = true;
    }

    fn disarm(&mut self) {
        unsafe {
            let p = &*TC1::ptr();
            p.tccr1b.modify(|r, w| w.bits(r.bits() & !Prescaler::MASK));
        }
        self.armed = false;
    }

    #[inline]
    fn is_armed(&self) -> bool {
        self.armed
    }

    fn take_pending(&mut self) -> bool {
        unsafe {
            let p = &*TC1::ptr();
            if p.tifr.read().bits() & OCF1A == 0 {
                return false;
            }
            p.tifr.write(|w| w.bits(OCF1A));
        }
        true
    }
}

use avr_device::atmega128a::TC0;
use embedded_hal::blocking::delay::DelayMs;
use stopwatch_firmware::config::CPU_FREQ_HZ;
use stopwatch_firmware::hal::timer::Prescaler;

// TC0 clock-select codes differ from TC1 above /8, so only /8 is used here.
const PRESCALER: Prescaler = Prescaler::Div8;
const COUNTS_PER_MS: u32 = CPU_FREQ_HZ / PRESCALER.divisor() / 1000;

const _: () = assert!(COUNTS_PER_MS >= 1 && COUNTS_PER_MS <= 0xFF);

/// Busy-wait millisecond delay on the free-running Timer0.
pub struct Delay {
    _private: (),
}

impl Delay {
    pub fn new() -> Self {
        unsafe {
            let p = &*TC0::ptr();
            p.tccr0.write(|w| w.bits(PRESCALER.bits()));
        }
        Self { _private: () }
    }
}

impl DelayMs<u8> for Delay {
    fn delay_ms(&mut self, ms: u8) {
        let p = unsafe { &*TC0::ptr() };
        for _ in 0..ms {
            p.tcnt0.write(|w| unsafe { w.bits(0) });
            while (p.tcnt0.read().bits() as u32) < COUNTS_PER_MS {}
        }
    }
}

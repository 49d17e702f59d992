//! Compare-match tick configuration.
//!
//! The firmware derives its 1 Hz tick from a 16-bit timer in Clear Timer on
//! Compare mode: the counter runs at `clock / prescaler` and wraps after
//! `compare + 1` counts, raising one interrupt per wrap.

/// Clock-select setting of a timer. The discriminant is the CS bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Prescaler {
    Stop = 0,
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

impl Prescaler {
    /// Mask of the clock-select bits in the control register.
    pub const MASK: u8 = 0x07;

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Division factor, `0` for a stopped clock.
    pub const fn divisor(self) -> u32 {
        match self {
            Prescaler::Stop => 0,
            Prescaler::Direct => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }
}

/// A fully derived tick configuration: prescaler plus compare register value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickRate {
    pub prescaler: Prescaler,
    pub compare: u16,
}

impl TickRate {
    /// Derives the compare value for `target_hz` ticks from `clock_hz`.
    ///
    /// Panics during const evaluation when the period does not fit the 16-bit
    /// compare register, so a bad configuration never reaches the chip.
    pub const fn derive(clock_hz: u32, prescaler: Prescaler, target_hz: u32) -> Self {
        let divisor = prescaler.divisor();
        assert!(divisor != 0, "a stopped prescaler cannot produce a tick");
        assert!(target_hz != 0, "tick rate must be non-zero");

        let counts = clock_hz / divisor / target_hz;
        assert!(counts >= 1, "prescaled clock is slower than the tick rate");
        assert!(counts <= 0x1_0000, "tick period overflows the compare register");

        Self {
            prescaler,
            compare: (counts - 1) as u16,
        }
    }

    /// Timer clock cycles between two ticks.
    pub const fn period_cycles(&self) -> u64 {
        (self.compare as u64 + 1) * self.prescaler.divisor() as u64
    }

    /// Deviation of the real tick period from the ideal one, in parts per million.
    pub const fn drift_ppm(&self, clock_hz: u32, target_hz: u32) -> u32 {
        let ideal = clock_hz as u64;
        let actual = self.period_cycles() * target_hz as u64;
        let diff = if actual > ideal {
            actual - ideal
        } else {
            ideal - actual
        };
        (diff * 1_000_000 / ideal) as u32
    }
}

/// The hardware timer that drives the stopwatch.
///
/// Whether the source is armed is the stopwatch's run state: pausing disarms it
/// and resuming arms it again with the same rate.
pub trait TickSource {
    fn arm(&mut self, rate: TickRate);
    fn disarm(&mut self);
    fn is_armed(&self) -> bool;

    /// Consumes a compare match that fired but has not been serviced yet.
    fn take_pending(&mut self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_megahertz_div64_is_exact() {
        let rate = TickRate::derive(1_000_000, Prescaler::Div64, 1);
        assert_eq!(rate.compare, 15_624);
        assert_eq!(rate.period_cycles(), 1_000_000);
        assert_eq!(rate.drift_ppm(1_000_000, 1), 0);
    }

    #[test]
    fn inexact_division_reports_drift() {
        // 1MHz / 1024 = 976.5625 counts per second, truncated to 976.
        let rate = TickRate::derive(1_000_000, Prescaler::Div1024, 1);
        assert_eq!(rate.compare, 975);
        assert_eq!(rate.drift_ppm(1_000_000, 1), 576);
    }

    #[test]
    fn coarse_compare_exceeds_one_percent() {
        // 1MHz / 1024 at 16Hz leaves only 61 counts per tick.
        let rate = TickRate::derive(1_000_000, Prescaler::Div1024, 16);
        assert!(rate.drift_ppm(1_000_000, 16) > 0);
        let rate = TickRate::derive(1_000_000, Prescaler::Div1024, 200);
        assert!(rate.drift_ppm(1_000_000, 200) > 10_000);
    }

    #[test]
    fn prescaler_bits_fit_clock_select_mask() {
        for p in [
            Prescaler::Stop,
            Prescaler::Direct,
            Prescaler::Div8,
            Prescaler::Div64,
            Prescaler::Div256,
            Prescaler::Div1024,
        ] {
            assert_eq!(p.bits() & !Prescaler::MASK, 0);
        }
    }

    #[test]
    #[should_panic]
    fn overflowing_period_is_rejected() {
        let _ = TickRate::derive(16_000_000, Prescaler::Div8, 1);
    }
}

//! Two-digit field to BCD nibble conversion and the display scan order.

use crate::clock::Time;

/// Number of multiplexed digits on the display.
pub const DIGIT_COUNT: usize = 6;

#[inline]
pub const fn tens(value: u8) -> u8 {
    value / 10
}

#[inline]
pub const fn units(value: u8) -> u8 {
    value % 10
}

/// One position of the six digit display, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitPosition {
    HourTens = 0,
    HourUnits = 1,
    MinuteTens = 2,
    MinuteUnits = 3,
    SecondTens = 4,
    SecondUnits = 5,
}

impl DigitPosition {
    /// Scan order used by the refresh engine.
    pub const ALL: [DigitPosition; DIGIT_COUNT] = [
        DigitPosition::HourTens,
        DigitPosition::HourUnits,
        DigitPosition::MinuteTens,
        DigitPosition::MinuteUnits,
        DigitPosition::SecondTens,
        DigitPosition::SecondUnits,
    ];

    /// Positions past the last digit have no counterpart and yield `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Extracts the decimal digit shown at this position.
    pub fn digit(self, time: &Time) -> u8 {
        match self {
            DigitPosition::HourTens => tens(time.hour()),
            DigitPosition::HourUnits => units(time.hour()),
            DigitPosition::MinuteTens => tens(time.minute()),
            DigitPosition::MinuteUnits => units(time.minute()),
            DigitPosition::SecondTens => tens(time.second()),
            DigitPosition::SecondUnits => units(time.second()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_recombines_every_field_value() {
        for n in 0..=99u8 {
            assert!(tens(n) <= 9 && units(n) <= 9);
            assert_eq!(tens(n) * 10 + units(n), n);
        }
    }

    #[test]
    fn positions_match_time_digits() {
        let t = Time::new(47, 8, 31);
        let from_positions: [u8; DIGIT_COUNT] = DigitPosition::ALL.map(|p| p.digit(&t));
        assert_eq!(from_positions, t.digits());
    }

    #[test]
    fn index_round_trips_and_rejects_out_of_range() {
        for (i, pos) in DigitPosition::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(DigitPosition::from_index(i), Some(*pos));
        }
        assert_eq!(DigitPosition::from_index(DIGIT_COUNT), None);
        assert_eq!(DigitPosition::from_index(255), None);
    }
}

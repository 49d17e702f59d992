use crate::clock::digits::{tens, units};
use crate::config::HOUR_CEILING;

const MINUTE_MAX: u8 = 59;
const SECOND_MAX: u8 = 59;

/// Elapsed time as shown on the display, `HH:MM:SS`.
///
/// Minutes and seconds always stay within `0..=59` once a mutation has
/// completed. Hours saturate at [`HOUR_CEILING`] instead of wrapping; reaching
/// past the ceiling pins the whole value at `99:59:59`, and going below zero
/// pins it at `00:00:00`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
}

impl Time {
    pub const ZERO: Time = Time {
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub const CEILING: Time = Time {
        hour: HOUR_CEILING,
        minute: MINUTE_MAX,
        second: SECOND_MAX,
    };

    /// Builds a time value, clamping every field into its range.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: if hour > HOUR_CEILING { HOUR_CEILING } else { hour },
            minute: if minute > MINUTE_MAX { MINUTE_MAX } else { minute },
            second: if second > SECOND_MAX { SECOND_MAX } else { second },
        }
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn increment_second(&mut self) {
        if self.second == SECOND_MAX {
            self.second = 0;
            self.increment_minute();
        } else {
            self.second += 1;
        }
    }

    pub fn decrement_second(&mut self) {
        if self.second == 0 {
            self.second = SECOND_MAX;
            self.decrement_minute();
        } else {
            self.second -= 1;
        }
    }

    pub fn increment_minute(&mut self) {
        if self.minute == MINUTE_MAX {
            self.minute = 0;
            self.increment_hour();
        } else {
            self.minute += 1;
        }
    }

    pub fn decrement_minute(&mut self) {
        if self.minute == 0 {
            self.minute = MINUTE_MAX;
            self.decrement_hour();
        } else {
            self.minute -= 1;
        }
    }

    /// Steps the hour up. At the ceiling the minutes and seconds are forced to
    /// their maximum as well, so a cascade from `99:59:59` lands back on it.
    pub fn increment_hour(&mut self) {
        if self.hour >= HOUR_CEILING {
            *self = Self::CEILING;
        } else {
            self.hour += 1;
        }
    }

    /// Steps the hour down. At zero the whole value collapses to `00:00:00`.
    pub fn decrement_hour(&mut self) {
        if self.hour == 0 {
            *self = Self::ZERO;
        } else {
            self.hour -= 1;
        }
    }

    /// Display digits in scan order: `H H M M S S`.
    pub fn digits(&self) -> [u8; 6] {
        [
            tens(self.hour),
            units(self.hour),
            tens(self.minute),
            units(self.minute),
            tens(self.second),
            units(self.second),
        ]
    }
}

impl ufmt::uDisplay for Time {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        let d = self.digits();
        let text = [
            b'0' + d[0],
            b'0' + d[1],
            b':',
            b'0' + d[2],
            b'0' + d[3],
            b':',
            b'0' + d[4],
            b'0' + d[5],
        ];
        // Every byte is an ASCII digit or a colon.
        match core::str::from_utf8(&text) {
            Ok(s) => f.write_str(s),
            Err(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_cascades_into_minute_and_hour() {
        let mut t = Time::new(3, 59, 59);
        t.increment_second();
        assert_eq!(t, Time::new(4, 0, 0));

        t.decrement_second();
        assert_eq!(t, Time::new(3, 59, 59));
    }

    #[test]
    fn minute_cascades_into_hour() {
        let mut t = Time::new(0, 59, 12);
        t.increment_minute();
        assert_eq!(t, Time::new(1, 0, 12));

        t.decrement_minute();
        assert_eq!(t, Time::new(0, 59, 12));
    }

    #[test]
    fn increment_and_decrement_are_inverse_below_ceiling() {
        let samples = [
            Time::new(0, 0, 0),
            Time::new(0, 0, 59),
            Time::new(3, 59, 46),
            Time::new(12, 59, 59),
            Time::new(98, 59, 58),
        ];
        for start in samples {
            let mut t = start;
            t.increment_second();
            t.decrement_second();
            assert_eq!(t, start);
        }

        // A full minute forwards and back again.
        let start = Time::new(7, 30, 15);
        let mut t = start;
        for _ in 0..60 {
            t.increment_second();
        }
        assert_eq!(t, Time::new(7, 31, 15));
        for _ in 0..60 {
            t.decrement_second();
        }
        assert_eq!(t, start);
    }

    #[test]
    fn ceiling_is_sticky() {
        let mut t = Time::new(98, 59, 59);
        t.increment_hour();
        assert_eq!(t, Time::CEILING);

        t.increment_hour();
        assert_eq!(t, Time::CEILING);

        t.increment_second();
        assert_eq!(t, Time::CEILING);

        t.increment_minute();
        assert_eq!(t, Time::CEILING);
    }

    #[test]
    fn ceiling_forces_minutes_and_seconds_to_max() {
        let mut t = Time::new(98, 10, 20);
        t.increment_hour();
        assert_eq!(t, Time::new(99, 10, 20));

        t.increment_hour();
        assert_eq!(t, Time::CEILING);
    }

    #[test]
    fn floor_is_sticky() {
        let mut t = Time::new(0, 0, 1);
        t.decrement_second();
        assert_eq!(t, Time::ZERO);

        t.decrement_second();
        assert_eq!(t, Time::ZERO);

        t.decrement_minute();
        assert_eq!(t, Time::ZERO);

        t.decrement_hour();
        assert_eq!(t, Time::ZERO);
    }

    #[test]
    fn floor_forces_minutes_and_seconds_to_zero() {
        let mut t = Time::new(0, 42, 17);
        t.decrement_hour();
        assert_eq!(t, Time::ZERO);
    }

    #[test]
    fn new_clamps_out_of_range_fields() {
        let t = Time::new(120, 75, 60);
        assert_eq!(t, Time::CEILING);
    }

    #[test]
    fn digits_follow_scan_order() {
        assert_eq!(Time::new(3, 59, 46).digits(), [0, 3, 5, 9, 4, 6]);
        assert_eq!(Time::CEILING.digits(), [9, 9, 5, 9, 5, 9]);
    }
}

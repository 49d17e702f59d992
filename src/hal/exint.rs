//! External interrupt sense control.

/// Condition that raises an external interrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    LowLevel,
    FallingEdge,
    RisingEdge,
}

impl Trigger {
    /// ISCn1:ISCn0 encoding.
    pub const fn sense_bits(self) -> u8 {
        match self {
            Trigger::LowLevel => 0b00,
            Trigger::FallingEdge => 0b10,
            Trigger::RisingEdge => 0b11,
        }
    }
}

/// External interrupt lines INT0..INT3, sensed through EICRA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Int0 = 0,
    Int1 = 1,
    Int2 = 2,
    Int3 = 3,
}

impl Line {
    /// Bit of this line in EIMSK / EIFR.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }

    #[inline]
    const fn shift(self) -> u8 {
        (self as u8) * 2
    }

    /// Returns `eicra` with this line's sense bits replaced by `trigger`.
    pub const fn sense_control(self, eicra: u8, trigger: Trigger) -> u8 {
        let cleared = eicra & !(0b11 << self.shift());
        cleared | (trigger.sense_bits() << self.shift())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sense_bits_land_in_line_slot() {
        assert_eq!(Line::Int0.sense_control(0, Trigger::FallingEdge), 0b0000_0010);
        assert_eq!(Line::Int1.sense_control(0, Trigger::RisingEdge), 0b0000_1100);
        assert_eq!(Line::Int2.sense_control(0, Trigger::FallingEdge), 0b0010_0000);
    }

    #[test]
    fn other_lines_are_preserved() {
        let eicra = Line::Int0.sense_control(0, Trigger::FallingEdge);
        let eicra = Line::Int1.sense_control(eicra, Trigger::RisingEdge);
        let eicra = Line::Int2.sense_control(eicra, Trigger::FallingEdge);
        assert_eq!(eicra, 0b0010_1110);

        // Reconfiguring one line leaves the others alone.
        let eicra = Line::Int1.sense_control(eicra, Trigger::LowLevel);
        assert_eq!(eicra, 0b0010_0010);
    }

    #[test]
    fn masks_are_one_hot() {
        assert_eq!(Line::Int0.mask(), 0x01);
        assert_eq!(Line::Int2.mask(), 0x04);
        assert_eq!(Line::Int3.mask(), 0x08);
    }
}

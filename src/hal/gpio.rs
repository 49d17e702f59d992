//! Port-level pin primitives shared by the board support code.
//!
//! Pins are addressed by `(port, bit)`. A bit index outside the 8-bit port
//! leaves the register untouched instead of faulting, since there is nowhere to
//! report a wiring mistake at runtime.

/// Number of pins on one I/O port.
pub const PINS_PER_PORT: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Location of a single pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinId {
    pub port: Port,
    pub bit: u8,
}

impl PinId {
    pub const fn new(port: Port, bit: u8) -> Self {
        Self { port, bit }
    }

    #[inline]
    pub fn mask(&self) -> Option<u8> {
        mask(self.bit)
    }
}

#[inline]
pub fn mask(bit: u8) -> Option<u8> {
    if bit < PINS_PER_PORT {
        Some(1 << bit)
    } else {
        None
    }
}

/// Returns `reg` with `bit` driven to `level`.
#[inline]
pub fn write_bit(reg: u8, bit: u8, level: Level) -> u8 {
    match (mask(bit), level) {
        (Some(m), Level::High) => reg | m,
        (Some(m), Level::Low) => reg & !m,
        (None, _) => reg,
    }
}

#[inline]
pub fn toggle_bit(reg: u8, bit: u8) -> u8 {
    match mask(bit) {
        Some(m) => reg ^ m,
        None => reg,
    }
}

/// Reads `bit` out of `reg`; a missing pin reads low.
#[inline]
pub fn read_bit(reg: u8, bit: u8) -> Level {
    match mask(bit) {
        Some(m) => Level::from(reg & m != 0),
        None => Level::Low,
    }
}

/// Returns `ddr` with `bit` configured for `direction`.
#[inline]
pub fn configure_bit(ddr: u8, bit: u8, direction: Direction) -> u8 {
    let level = match direction {
        Direction::Input => Level::Low,
        Direction::Output => Level::High,
    };
    write_bit(ddr, bit, level)
}

//! USART baud-rate arithmetic.
//!
//! The board runs at 1 MHz, where the normal-speed divider cannot hit 9600 baud
//! within tolerance, so the console always uses double-speed mode (U2X set):
//! `baud = clock / (8 * (UBRR + 1))`.

/// UBRR value for double-speed mode, rounded to the nearest divider.
pub const fn ubrr_double_speed(clock_hz: u32, baud: u32) -> u16 {
    assert!(baud != 0, "baud rate must be non-zero");
    let divider = (clock_hz + 4 * baud) / (8 * baud);
    assert!(divider >= 1, "baud rate too high for the clock");
    assert!(divider <= 0x1000, "UBRR is 12 bits wide");
    (divider - 1) as u16
}

/// Deviation of the real baud rate from `baud`, in parts per million.
pub const fn baud_error_ppm(clock_hz: u32, baud: u32, ubrr: u16) -> u32 {
    let actual = clock_hz as u64 * 1_000_000 / (8 * (ubrr as u64 + 1));
    let ideal = baud as u64 * 1_000_000;
    let diff = if actual > ideal {
        actual - ideal
    } else {
        ideal - actual
    };
    (diff / baud as u64) as u32
}

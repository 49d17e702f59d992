//! Configuration constants for the stopwatch firmware

use crate::clock::Time;
use crate::hal::timer::{Prescaler, TickRate};
use crate::hal::uart::{baud_error_ppm, ubrr_double_speed};

/// CPU frequency in Hz (factory fuses, internal RC oscillator)
pub const CPU_FREQ_HZ: u32 = 1_000_000;

/// Stopwatch tick frequency in Hz
pub const TICK_HZ: u32 = 1;

/// Timer1 clock divider for the tick
pub const TICK_PRESCALER: Prescaler = Prescaler::Div64;

/// Compare-match configuration for a 1 Hz tick
pub const TICK_RATE: TickRate = TickRate::derive(CPU_FREQ_HZ, TICK_PRESCALER, TICK_HZ);

/// Largest tolerated tick drift, in parts per million (1%)
pub const MAX_TICK_DRIFT_PPM: u32 = 10_000;

const _: () = assert!(
    TICK_RATE.drift_ppm(CPU_FREQ_HZ, TICK_HZ) <= MAX_TICK_DRIFT_PPM,
    "tick rate drifts more than 1%"
);

/// Highest hour the counter reaches before it pins at the ceiling
pub const HOUR_CEILING: u8 = 99;

const _: () = assert!(HOUR_CEILING <= 99, "hours are shown on two digits");

/// Time shown at power-up
pub const SEED_TIME: Time = Time::new(3, 59, 46);

/// How long each digit stays lit during a refresh pass, in milliseconds
pub const DIGIT_SETTLE_MS: u8 = 1;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Double-speed baud divider for [`UART_BAUD`]
pub const UART_UBRR: u16 = ubrr_double_speed(CPU_FREQ_HZ, UART_BAUD);

const _: () = assert!(
    baud_error_ppm(CPU_FREQ_HZ, UART_BAUD, UART_UBRR) <= 20_000,
    "console baud rate off by more than 2%"
);

//! Stopwatch firmware for the ATmega128.
//!
//! The library holds everything that does not touch a register: the time
//! arithmetic, the stopwatch state the interrupts act on, the display and
//! panel drivers written against `embedded-hal`, and the foreground loop. The
//! firmware binary (`src/main.rs`, `atmega128` feature) supplies the board.
#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod clock;
pub mod config;
pub mod drivers;
pub mod hal;
pub mod os;

pub use application::{Application, Panel};
pub use clock::{Adjustment, Mode, Stopwatch, Time};
pub use os::{Interrupt, Shared, Snapshot};

/// Failure reported by a peripheral behind an `embedded-hal` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Gpio,
    Serial,
}

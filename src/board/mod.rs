//! ATmega128 board support: everything that touches a register.

pub mod delay;
pub mod exint;
pub mod gpio;
pub mod pins;
pub mod timer;
pub mod uart;

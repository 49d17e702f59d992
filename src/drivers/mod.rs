pub mod button;
pub mod indicator;
pub mod serial_console;
pub mod seven_segment;

pub use button::{Button, ButtonEvent, ButtonHandler, PressLatch, Pull};
pub use indicator::{Buzzer, Indicator, Led, ModeLeds, Polarity};
pub use serial_console::SerialConsole;
pub use seven_segment::{SevenSegment, BUS_WIDTH};

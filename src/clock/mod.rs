//! Timekeeping: the time value, count direction, alarm rule and the shared
//! stopwatch state the interrupts act on.

pub mod alarm;
pub mod digits;
pub mod mode;
pub mod stopwatch;
pub mod time;

pub use alarm::alarm_active;
pub use digits::{DigitPosition, DIGIT_COUNT};
pub use mode::Mode;
pub use stopwatch::{Adjustment, Stopwatch};
pub use time::Time;

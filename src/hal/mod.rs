pub mod exint;
pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use exint::{Line, Trigger};
pub use gpio::{Direction, Level, PinId, Port};
pub use timer::{Prescaler, TickRate, TickSource};

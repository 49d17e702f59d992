//! Front-panel wiring.
//!
//! The three control buttons sit on the external interrupt pins (INT0..INT2 are
//! PD0..PD2 on this part). The buzzer therefore moves off PD0 to PD6.

use super::gpio::{Input, Output, Pin};
use stopwatch_firmware::clock::DIGIT_COUNT;
use stopwatch_firmware::drivers::{
    Button, ButtonHandler, Buzzer, Led, ModeLeds, Polarity, Pull, SevenSegment, BUS_WIDTH,
};
use stopwatch_firmware::hal::gpio::{PinId, Port};
use stopwatch_firmware::{Error, Panel};

/// INT0, internal pull-up, falling edge on press.
pub const RESET: PinId = PinId::new(Port::D, 0);
/// INT1, external pull-up, rising edge on release.
pub const PAUSE: PinId = PinId::new(Port::D, 1);
/// INT2, internal pull-up, falling edge on press.
pub const RESUME: PinId = PinId::new(Port::D, 2);

pub const MODE: PinId = PinId::new(Port::B, 7);

/// Hour, minute and second adjusters, in `Adjustment::ALL` order.
pub const ADJUST: [PinId; 6] = [
    PinId::new(Port::B, 1),
    PinId::new(Port::B, 0),
    PinId::new(Port::B, 4),
    PinId::new(Port::B, 3),
    PinId::new(Port::B, 6),
    PinId::new(Port::B, 5),
];

/// Both LEDs sink current: lit when low.
pub const COUNT_UP_LED: PinId = PinId::new(Port::D, 4);
pub const COUNT_DOWN_LED: PinId = PinId::new(Port::D, 5);

pub const BUZZER: PinId = PinId::new(Port::D, 6);

/// BCD decoder inputs, least significant bit first.
pub const BCD_BUS: [PinId; BUS_WIDTH] = [
    PinId::new(Port::C, 0),
    PinId::new(Port::C, 1),
    PinId::new(Port::C, 2),
    PinId::new(Port::C, 3),
];

/// Digit enables, tens of hours first.
pub const DIGIT_ENABLES: [PinId; DIGIT_COUNT] = [
    PinId::new(Port::A, 0),
    PinId::new(Port::A, 1),
    PinId::new(Port::A, 2),
    PinId::new(Port::A, 3),
    PinId::new(Port::A, 4),
    PinId::new(Port::A, 5),
];

fn output(id: PinId) -> Pin<Output> {
    Pin::new(id).into_output()
}

fn internal_pull_up(id: PinId) -> Button<Pin<Input>> {
    Button::new(Pin::new(id).into_pull_up_input(), Pull::Internal)
}

/// Inputs for the reset, pause and resume interrupts.
pub fn control_inputs() {
    Pin::new(RESET).into_pull_up_input();
    Pin::new(PAUSE).into_floating_input();
    Pin::new(RESUME).into_pull_up_input();
}

/// Everything the foreground loop drives, with all loads off.
pub fn panel() -> Result<Panel<Pin<Input>, Pin<Output>>, Error> {
    Ok(Panel {
        display: SevenSegment::new(DIGIT_ENABLES.map(output), BCD_BUS.map(output))?,
        leds: ModeLeds::new(
            Led::new(output(COUNT_UP_LED), Polarity::ActiveLow)?,
            Led::new(output(COUNT_DOWN_LED), Polarity::ActiveLow)?,
        ),
        buzzer: Buzzer::new(output(BUZZER), Polarity::ActiveHigh)?,
        buttons: ButtonHandler::new(internal_pull_up(MODE), ADJUST.map(internal_pull_up)),
    })
}

use crate::clock::Adjustment;
use embedded_hal::digital::v2::InputPin;
use heapless::Vec;

/// How a push button is wired.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pull {
    /// External pull-down, pressed reads high.
    Down,
    /// External pull-up, pressed reads low.
    Up,
    /// AVR internal pull-up, pressed reads low.
    Internal,
}

pub struct Button<P> {
    pin: P,
    pull: Pull,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P, pull: Pull) -> Self {
        Self { pin, pull }
    }

    /// Debounced level of the button. A pin that cannot be read counts as released.
    pub fn is_pressed(&self) -> bool {
        match self.pull {
            Pull::Down => self.pin.is_high().unwrap_or(false),
            Pull::Up | Pull::Internal => self.pin.is_low().unwrap_or(false),
        }
    }
}

/// Turns a held level into a single press.
#[derive(Copy, Clone, Debug, Default)]
pub struct PressLatch {
    held: bool,
}

impl PressLatch {
    pub const fn new() -> Self {
        Self { held: false }
    }

    /// True only on the poll where the input goes from released to pressed.
    pub fn poll(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.held;
        self.held = pressed;
        fired
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    ToggleMode,
    Adjust(Adjustment),
}

const ADJUST_COUNT: usize = Adjustment::ALL.len();
const EVENT_CAPACITY: usize = ADJUST_COUNT + 1;

/// The mode toggle plus the six field adjustment buttons.
pub struct ButtonHandler<P> {
    mode: Button<P>,
    adjust: [Button<P>; ADJUST_COUNT],
    mode_latch: PressLatch,
    adjust_latches: [PressLatch; ADJUST_COUNT],
}

impl<P: InputPin> ButtonHandler<P> {
    /// `adjust` follows the order of [`Adjustment::ALL`].
    pub fn new(mode: Button<P>, adjust: [Button<P>; ADJUST_COUNT]) -> Self {
        Self {
            mode,
            adjust,
            mode_latch: PressLatch::new(),
            adjust_latches: [PressLatch::new(); ADJUST_COUNT],
        }
    }

    /// Samples every button once and reports the ones that were just pressed.
    ///
    /// Never waits for a release: a held button simply stops reporting until
    /// it has been let go, so the caller keeps refreshing the display.
    pub fn poll(&mut self) -> Vec<ButtonEvent, EVENT_CAPACITY> {
        let mut events = Vec::new();

        if self.mode_latch.poll(self.mode.is_pressed()) {
            events.push(ButtonEvent::ToggleMode).ok();
        }

        for ((button, latch), adjustment) in self
            .adjust
            .iter()
            .zip(self.adjust_latches.iter_mut())
            .zip(Adjustment::ALL)
        {
            if latch.poll(button.is_pressed()) {
                events.push(ButtonEvent::Adjust(adjustment)).ok();
            }
        }

        events
    }

    /// True while any button is still down.
    pub fn any_held(&self) -> bool {
        self.mode_latch.is_held() || self.adjust_latches.iter().any(PressLatch::is_held)
    }
}

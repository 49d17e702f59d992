//! Foreground loop of the stopwatch
//! Everything here runs outside interrupt context and reaches the shared
//! state only through [`Shared::lock`].

use crate::drivers::{Buzzer, ButtonEvent, ButtonHandler, ModeLeds, SevenSegment};
use crate::os::Shared;
use crate::Error;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use ufmt::{uWrite, uwriteln};

/// Front-panel hardware driven by the foreground loop.
pub struct Panel<I, O> {
    pub display: SevenSegment<O>,
    pub leds: ModeLeds<O>,
    pub buzzer: Buzzer<O>,
    pub buttons: ButtonHandler<I>,
}

/// Main application state and logic
pub struct Application {
    alarm: bool,
    passes: u32,
}

impl Application {
    pub const fn new() -> Self {
        Self {
            alarm: false,
            passes: 0,
        }
    }

    /// Arms the tick and announces the starting state.
    pub fn start<S: Shared, W: uWrite>(&mut self, shared: &S, console: &mut W) {
        let snap = shared.lock(|sw| {
            sw.start();
            (sw.time(), sw.mode())
        });
        uwriteln!(*console, "[INF] start {} {}\r", snap.0, snap.1).ok();
    }

    /// One pass of the foreground loop.
    ///
    /// Refreshes the display first, then handles newly pressed buttons, then
    /// drives the buzzer. Nothing here waits on a button, so a held button
    /// never stalls the refresh.
    pub fn update<S, I, O, D, W>(
        &mut self,
        shared: &S,
        panel: &mut Panel<I, O>,
        delay: &mut D,
        console: &mut W,
    ) -> Result<(), Error>
    where
        S: Shared,
        I: InputPin,
        O: OutputPin,
        D: DelayMs<u8>,
        W: uWrite,
    {
        self.passes = self.passes.wrapping_add(1);

        let snap = shared.snapshot();
        panel.display.refresh(&snap.time, delay)?;
        panel.leds.show(snap.mode)?;

        for event in panel.buttons.poll() {
            self.handle_button(event, shared, console);
        }

        let alarm = shared.lock(|sw| sw.alarm());
        panel.buzzer.set(alarm)?;
        if alarm != self.alarm {
            self.alarm = alarm;
            if alarm {
                uwriteln!(*console, "[INF] alarm on\r").ok();
            } else {
                uwriteln!(*console, "[INF] alarm off\r").ok();
            }
        }

        Ok(())
    }

    fn handle_button<S: Shared, W: uWrite>(&mut self, event: ButtonEvent, shared: &S, console: &mut W) {
        match event {
            ButtonEvent::ToggleMode => {
                let mode = shared.lock(|sw| sw.toggle_mode());
                uwriteln!(*console, "[DBG] mode {}\r", mode).ok();
            }
            ButtonEvent::Adjust(adjustment) => {
                let time = shared.lock(|sw| sw.adjust(adjustment));
                uwriteln!(*console, "[DBG] {} {}\r", adjustment.as_str(), time).ok();
            }
        }
    }

    /// Foreground passes since start-up, wrapping.
    #[inline]
    pub fn passes(&self) -> u32 {
        self.passes
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

use crate::clock::{alarm_active, Mode, Time};
use crate::hal::timer::{TickRate, TickSource};

/// Manual change to one field of the time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjustment {
    HourUp,
    HourDown,
    MinuteUp,
    MinuteDown,
    SecondUp,
    SecondDown,
}

impl Adjustment {
    pub const ALL: [Adjustment; 6] = [
        Adjustment::HourUp,
        Adjustment::HourDown,
        Adjustment::MinuteUp,
        Adjustment::MinuteDown,
        Adjustment::SecondUp,
        Adjustment::SecondDown,
    ];

    pub fn apply(self, time: &mut Time) {
        match self {
            Adjustment::HourUp => time.increment_hour(),
            Adjustment::HourDown => time.decrement_hour(),
            Adjustment::MinuteUp => time.increment_minute(),
            Adjustment::MinuteDown => time.decrement_minute(),
            Adjustment::SecondUp => time.increment_second(),
            Adjustment::SecondDown => time.decrement_second(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Adjustment::HourUp => "hour+",
            Adjustment::HourDown => "hour-",
            Adjustment::MinuteUp => "minute+",
            Adjustment::MinuteDown => "minute-",
            Adjustment::SecondUp => "second+",
            Adjustment::SecondDown => "second-",
        }
    }
}

/// The state shared between the tick/control interrupts and the foreground.
///
/// There is exactly one of these in the firmware. It is created in a static
/// before `main` runs, armed once during start-up, and lives until power-off.
/// Every access goes through [`crate::os::Shared::lock`].
pub struct Stopwatch<T> {
    time: Time,
    mode: Mode,
    rate: TickRate,
    ticker: T,
}

impl<T: TickSource> Stopwatch<T> {
    pub const fn new(ticker: T, seed: Time, rate: TickRate) -> Self {
        Self {
            time: seed,
            mode: Mode::CountUp,
            rate,
            ticker,
        }
    }

    /// Arms the tick source for the first time.
    pub fn start(&mut self) {
        self.ticker.arm(self.rate);
    }

    #[inline]
    pub fn time(&self) -> Time {
        self.time
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.ticker.is_armed()
    }

    #[inline]
    pub fn alarm(&self) -> bool {
        alarm_active(self.mode, &self.time)
    }

    /// Compare-match handler: one second forwards or backwards.
    pub fn on_tick(&mut self) {
        if !self.ticker.is_armed() {
            return;
        }
        match self.mode {
            Mode::CountUp => self.time.increment_second(),
            Mode::CountDown => self.time.decrement_second(),
        }
    }

    pub fn pause(&mut self) {
        self.ticker.disarm();
    }

    pub fn resume(&mut self) {
        self.ticker.arm(self.rate);
    }

    /// Zeroes the time and returns to counting up, whether running or not.
    ///
    /// A tick that is already pending is serviced first, so the reset is the
    /// last write and no stale tick can land on top of `00:00:00`.
    pub fn reset(&mut self) {
        if self.ticker.take_pending() {
            self.on_tick();
        }
        self.time = Time::ZERO;
        self.mode = Mode::CountUp;
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn adjust(&mut self, adjustment: Adjustment) -> Time {
        adjustment.apply(&mut self.time);
        self.time
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }
}

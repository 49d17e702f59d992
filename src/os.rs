//! Foreground/interrupt sharing for the stopwatch state.
//!
//! There is no scheduler: one foreground loop runs forever and four interrupt
//! handlers preempt it. All of them reach the [`Stopwatch`] through
//! [`Shared::lock`], which masks the interrupt sources for the duration of the
//! closure. The closure form means the mask is lifted on every exit path.

use crate::clock::{Mode, Stopwatch, Time};
use crate::hal::timer::TickSource;

/// Interrupt sources that act on the stopwatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interrupt {
    /// INT0, falling edge
    Reset,
    /// INT1, rising edge
    Pause,
    /// INT2, falling edge
    Resume,
    /// Timer1 compare match A
    Tick,
}

impl Interrupt {
    /// Hardware service order when several are pending at once: lower vector
    /// numbers are taken first.
    pub const BY_PRIORITY: [Interrupt; 4] = [
        Interrupt::Reset,
        Interrupt::Pause,
        Interrupt::Resume,
        Interrupt::Tick,
    ];

    /// Handler body. Runs with interrupts masked; O(1) and never blocks.
    pub fn service<T: TickSource>(self, stopwatch: &mut Stopwatch<T>) {
        match self {
            Interrupt::Reset => stopwatch.reset(),
            Interrupt::Pause => stopwatch.pause(),
            Interrupt::Resume => stopwatch.resume(),
            Interrupt::Tick => stopwatch.on_tick(),
        }
    }
}

/// Consistent copy of everything the foreground shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub time: Time,
    pub mode: Mode,
    pub alarm: bool,
    pub running: bool,
}

/// Exclusive access to the one stopwatch instance.
pub trait Shared {
    type Ticker: TickSource;

    /// Runs `f` inside a critical section.
    fn lock<R>(&self, f: impl FnOnce(&mut Stopwatch<Self::Ticker>) -> R) -> R;

    /// Reads the whole state at once so the display never sees a torn triple.
    fn snapshot(&self) -> Snapshot {
        self.lock(|sw| Snapshot {
            time: sw.time(),
            mode: sw.mode(),
            alarm: sw.alarm(),
            running: sw.is_running(),
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::clock::stopwatch::testing::FakeTicker;
    use crate::config::TICK_RATE;
    use core::cell::{Cell, RefCell};

    /// Single-core interrupt model for tests.
    ///
    /// Interrupts raised while a lock is held stay pending and are serviced in
    /// priority order as soon as the outermost lock is released, the way the
    /// AVR takes them once the I flag is set again.
    pub struct SimShared {
        stopwatch: RefCell<Stopwatch<FakeTicker>>,
        depth: Cell<u32>,
        pub locks: Cell<u32>,
        pending: Cell<[bool; 4]>,
    }

    impl SimShared {
        pub fn new(seed: Time) -> Self {
            let mut sw = Stopwatch::new(FakeTicker::default(), seed, TICK_RATE);
            sw.start();
            Self {
                stopwatch: RefCell::new(sw),
                depth: Cell::new(0),
                locks: Cell::new(0),
                pending: Cell::new([false; 4]),
            }
        }

        /// Latches an interrupt request; serviced immediately when no lock is held.
        pub fn raise(&self, irq: Interrupt) {
            let mut pending = self.pending.get();
            pending[irq as usize] = true;
            self.pending.set(pending);
            if self.depth.get() == 0 {
                self.dispatch();
            }
        }

        fn dispatch(&self) {
            let mut pending = self.pending.take();
            let mut sw = self.stopwatch.borrow_mut();

            // The compare-match flag lives in the timer, where a reset can see it.
            if core::mem::take(&mut pending[Interrupt::Tick as usize]) {
                sw.ticker_mut().pending = true;
            }

            for irq in Interrupt::BY_PRIORITY {
                let fire = match irq {
                    Interrupt::Tick => sw.ticker_mut().take_pending(),
                    other => pending[other as usize],
                };
                if fire {
                    irq.service(&mut *sw);
                }
            }
        }
    }

    impl Shared for SimShared {
        type Ticker = FakeTicker;

        fn lock<R>(&self, f: impl FnOnce(&mut Stopwatch<FakeTicker>) -> R) -> R {
            self.locks.set(self.locks.get() + 1);
            self.depth.set(self.depth.get() + 1);
            let result = f(&mut *self.stopwatch.borrow_mut());
            self.depth.set(self.depth.get() - 1);
            if self.depth.get() == 0 {
                self.dispatch();
            }
            result
        }
    }
}

#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use panic_halt as _;
use avr_device::interrupt::{self, Mutex};
use core::cell::RefCell;

mod board;

use board::timer::CompareTimer;
use stopwatch_firmware::config::{SEED_TIME, TICK_RATE};
use stopwatch_firmware::drivers::SerialConsole;
use stopwatch_firmware::hal::exint::{Line, Trigger};
use stopwatch_firmware::{Application, Interrupt, Shared, Stopwatch};

// The one stopwatch, shared by the foreground loop and the interrupt handlers
static STOPWATCH: Mutex<RefCell<Stopwatch<CompareTimer>>> =
    Mutex::new(RefCell::new(Stopwatch::new(CompareTimer::new(), SEED_TIME, TICK_RATE)));

/// Foreground access to [`STOPWATCH`] with interrupts masked.
struct Global;

impl Shared for Global {
    type Ticker = CompareTimer;

    fn lock<R>(&self, f: impl FnOnce(&mut Stopwatch<CompareTimer>) -> R) -> R {
        interrupt::free(|cs| f(&mut *STOPWATCH.borrow(cs).borrow_mut()))
    }
}

fn service(irq: Interrupt) {
    interrupt::free(|cs| irq.service(&mut *STOPWATCH.borrow(cs).borrow_mut()));
}

#[avr_device::interrupt(atmega128a)]
fn INT0() {
    service(Interrupt::Reset);
}

#[avr_device::interrupt(atmega128a)]
fn INT1() {
    service(Interrupt::Pause);
}

#[avr_device::interrupt(atmega128a)]
fn INT2() {
    service(Interrupt::Resume);
}

#[avr_device::interrupt(atmega128a)]
fn TIMER1_COMPA() {
    service(Interrupt::Tick);
}

#[avr_device::entry]
fn main() -> ! {
    let mut console = SerialConsole::new(board::uart::Usart0::new());
    let mut delay = board::delay::Delay::new();

    // Board pins cannot fail; an error here means a wiring table bug.
    let mut panel = match board::pins::panel() {
        Ok(panel) => panel,
        Err(_) => loop {
            avr_device::asm::sleep();
        },
    };

    board::pins::control_inputs();
    board::exint::listen(Line::Int0, Trigger::FallingEdge);
    board::exint::listen(Line::Int1, Trigger::RisingEdge);
    board::exint::listen(Line::Int2, Trigger::FallingEdge);

    // Enable interrupts globally
    unsafe { interrupt::enable() };

    #[cfg(feature = "debug")]
    console.info("stopwatch firmware (debug)").ok();

    let mut app = Application::new();
    app.start(&Global, &mut console);

    loop {
        app.update(&Global, &mut panel, &mut delay, &mut console).ok();
    }
}

//! Interrupt-driven USART0 transmitter for the serial console.
//!
//! Bytes go into a queue and the data-register-empty interrupt feeds them to
//! the shifter, so a log line costs the foreground loop a few queue pushes
//! rather than a millisecond per byte.

use avr_device::atmega128a::USART0;
use avr_device::interrupt::{self, Mutex};
use core::cell::RefCell;
use core::convert::Infallible;
use embedded_hal::serial;
use heapless::spsc::Queue;
use stopwatch_firmware::config::UART_UBRR;

const TX_CAPACITY: usize = 64;

/// UCSR0A: double transmission speed.
const U2X: u8 = 1 << 1;
/// UCSR0B: data register empty interrupt enable.
const UDRIE: u8 = 1 << 5;
/// UCSR0B: transmitter enable.
const TXEN: u8 = 1 << 3;
/// UCSR0C: 8 data bits, no parity, one stop bit.
const FRAME_8N1: u8 = 0b0000_0110;

static TX_QUEUE: Mutex<RefCell<Queue<u8, TX_CAPACITY>>> = Mutex::new(RefCell::new(Queue::new()));

/// Transmit half of USART0 (TXD0 on PE1).
pub struct Usart0 {
    _private: (),
}

impl Usart0 {
    pub fn new() -> Self {
        unsafe {
            let p = &*USART0::ptr();
            p.ubrr0h.write(|w| w.bits((UART_UBRR >> 8) as u8));
            p.ubrr0l.write(|w| w.bits(UART_UBRR as u8));
            p.ucsr0a.write(|w| w.bits(U2X));
            p.ucsr0c.write(|w| w.bits(FRAME_8N1));
            p.ucsr0b.write(|w| w.bits(TXEN));
        }
        Self { _private: () }
    }
}

impl serial::Write<u8> for Usart0 {
    type Error = Infallible;

    /// Queues `byte`; `WouldBlock` while the queue is full.
    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        interrupt::free(|cs| {
            TX_QUEUE
                .borrow(cs)
                .borrow_mut()
                .enqueue(byte)
                .map_err(|_| nb::Error::WouldBlock)?;
            unsafe {
                (*USART0::ptr()).ucsr0b.modify(|r, w| w.bits(r.bits() | UDRIE));
            }
            Ok(())
        })
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        let drained = interrupt::free(|cs| TX_QUEUE.borrow(cs).borrow().is_empty());
        if drained {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

#[avr_device::interrupt(atmega128a)]
fn USART0_UDRE() {
    interrupt::free(|cs| {
        let p = unsafe { &*USART0::ptr() };
        match TX_QUEUE.borrow(cs).borrow_mut().dequeue() {
            Some(byte) => p.udr0.write(|w| unsafe { w.bits(byte) }),
            // Nothing left: mask the interrupt until the next write.
            None => p.ucsr0b.modify(|r, w| unsafe { w.bits(r.bits() & !UDRIE) }),
        }
    });
}

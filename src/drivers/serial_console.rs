use crate::Error;
use embedded_hal::serial;

/// Line-oriented log output over a UART.
pub struct SerialConsole<S> {
    serial: S,
}

impl<S: serial::Write<u8>> SerialConsole<S> {
    pub fn new(serial: S) -> Self {
        Self { serial }
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        nb::block!(self.serial.write(byte)).map_err(|_| Error::Serial)
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), Error> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    pub fn write_line(&mut self, s: &str) -> Result<(), Error> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    pub fn write_hex(&mut self, val: u8) -> Result<(), Error> {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        self.write_byte(HEX_CHARS[(val >> 4) as usize])?;
        self.write_byte(HEX_CHARS[(val & 0xF) as usize])
    }

    pub fn info(&mut self, msg: &str) -> Result<(), Error> {
        self.write_str("[INF] ")?;
        self.write_line(msg)
    }

    // Print formatted debug info
    pub fn debug(&mut self, msg: &str, val: u8) -> Result<(), Error> {
        self.write_str("[DBG] ")?;
        self.write_str(msg)?;
        self.write_str(": 0x")?;
        self.write_hex(val)?;
        self.write_str("\r\n")
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        nb::block!(self.serial.flush()).map_err(|_| Error::Serial)
    }

    pub fn release(self) -> S {
        self.serial
    }
}

impl<S: serial::Write<u8>> ufmt::uWrite for SerialConsole<S> {
    type Error = Error;

    fn write_str(&mut self, s: &str) -> Result<(), Error> {
        SerialConsole::write_str(self, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Mode, Time};
    use embedded_hal_mock::serial::{Mock as SerialMock, Transaction as SerialTransaction};

    #[test]
    fn debug_line_has_hex_value() {
        let mut uart = SerialMock::new(&[SerialTransaction::write_many(b"[DBG] Mode: 0x1F\r\n")]);
        let mut console = SerialConsole::new(uart.clone());
        console.debug("Mode", 0x1F).unwrap();
        uart.done();
    }

    #[test]
    fn info_line_and_flush() {
        let mut uart = SerialMock::new(&[
            SerialTransaction::write_many(b"[INF] Ready\r\n"),
            SerialTransaction::flush(),
        ]);
        let mut console = SerialConsole::new(uart.clone());
        console.info("Ready").unwrap();
        console.flush().unwrap();
        uart.done();
    }

    #[test]
    fn ufmt_renders_time_and_mode() {
        let mut uart = SerialMock::new(&[SerialTransaction::write_many(
            b"03:59:46 count-down\r\n",
        )]);
        let mut console = SerialConsole::new(uart.clone());
        ufmt::uwrite!(console, "{} {}\r\n", Time::new(3, 59, 46), Mode::CountDown).unwrap();
        uart.done();
    }
}

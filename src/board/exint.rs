use avr_device::atmega128a::EXINT;
use stopwatch_firmware::hal::exint::{Line, Trigger};

/// Configures `line` to interrupt on `trigger` and enables it.
///
/// The line is masked while its sense bits change and any flag latched under
/// the old setting is cleared before it is unmasked again.
pub fn listen(line: Line, trigger: Trigger) {
    unsafe {
        let p = &*EXINT::ptr();
        p.eimsk.modify(|r, w| w.bits(r.bits() & !line.mask()));
        p.eicra.modify(|r, w| w.bits(line.sense_control(r.bits(), trigger)));
        p.eifr.write(|w| w.bits(line.mask()));
        p.eimsk.modify(|r, w| w.bits(r.bits() | line.mask()));
    }
}

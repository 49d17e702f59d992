use crate::clock::{Mode, Time};

/// The buzzer sounds while a countdown sits at `00:00:00`.
///
/// Nothing is latched: any adjustment away from zero silences it on the next
/// foreground pass.
#[inline]
pub fn alarm_active(mode: Mode, time: &Time) -> bool {
    mode == Mode::CountDown && time.is_zero()
}

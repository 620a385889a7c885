//! Bit-level character encoder for the shared data line.
//!
//! One character is 11 bit periods: a released-high start bit, eight
//! data bits LSB first, and two driven-low end bits.  Polarity is
//! inverted relative to the payload — a payload 1 pulls the line low,
//! a payload 0 releases it high — matching what the drive controller
//! samples on the far side.

use embedded_hal::delay::DelayNs;

use crate::app::ports::{LineMode, LinePort};
use crate::config::BIT_PERIOD_MS;

/// Clock one character onto the data line.
///
/// Blocks for the full 44 ms frame and leaves the line driven low (the
/// end-marker level).  Not re-entrant; the single main context is the
/// only caller.
pub fn send_character<H>(hw: &mut H, ch: u8)
where
    H: LinePort + DelayNs,
{
    // Start bit: release high for one period.
    hw.set_data(LineMode::HighImpedance);
    hw.delay_ms(BIT_PERIOD_MS);

    for bit in 0..8 {
        let mode = if ch & (1 << bit) == 0 {
            LineMode::HighImpedance
        } else {
            LineMode::DriveLow
        };
        hw.set_data(mode);
        hw.delay_ms(BIT_PERIOD_MS);
    }

    // End marker: two periods driven low.
    hw.set_data(LineMode::DriveLow);
    hw.delay_ms(2 * BIT_PERIOD_MS);
}

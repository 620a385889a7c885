//! Group sequencing: preamble + selector, four slots, N repetitions.

use embedded_hal::delay::DelayNs;

use crate::app::ports::LinePort;
use crate::config::{InjectorConfig, TRAILER_DELAY_MS};
use crate::injection::alphabet::{GROUP_SLOTS, PREAMBLE};
use crate::injection::encoder;

/// Run one full transmission cycle: `outer_repetitions` passes over the
/// four selector slots, each slot a preamble + selector group followed
/// by the trailer delay.  Strictly sequential, no early exit — the long
/// fixed duration is what lets the controller's read window land on at
/// least one clean group.
pub fn run_cycle<H>(hw: &mut H, config: &InjectorConfig)
where
    H: LinePort + DelayNs,
{
    for _ in 0..config.outer_repetitions {
        for slot in 0..GROUP_SLOTS {
            for ch in PREAMBLE {
                encoder::send_character(hw, ch);
            }
            encoder::send_character(hw, config.region.selector(slot));
            hw.delay_ms(TRAILER_DELAY_MS);
        }
    }
}

/// Total groups a cycle transmits; what the controller reports upward.
pub fn groups_per_cycle(config: &InjectorConfig) -> u16 {
    u16::from(config.outer_repetitions) * GROUP_SLOTS as u16
}

//! Protocol timing and build-time configuration.
//!
//! Every delay in the injection protocol is a named constant here.
//! These values are compatibility-critical: the drive controller samples
//! the line on a fixed schedule, so changing any of them changes whether
//! the injected strings are accepted at all.

use crate::injection::alphabet::RegionProfile;

/// Width of one encoded bit on the data line.
pub const BIT_PERIOD_MS: u32 = 4;

/// Wall-clock cost of one encoded character:
/// 1 start bit + 8 data bits + 2 end bits.
pub const CHARACTER_MS: u32 = 11 * BIT_PERIOD_MS;

/// Pause after each 4-character group, giving the controller one full
/// read window per group.
pub const TRAILER_DELAY_MS: u32 = 72;

/// Wake-up to data-line takeover.
pub const DATA_WARMUP_MS: u32 = 50;

/// Data-line takeover to gate-line takeover.
pub const GATE_WARMUP_MS: u32 = 850;

/// Gate-line takeover to the first transmitted character, aligned to the
/// controller's readiness window after drive spin-up.
pub const SPINUP_SETTLE_MS: u32 = 314;

/// Debounce window for the door-sense switch.  An edge only arms the
/// system if the door still reads closed this long after the edge.
pub const DOOR_DEBOUNCE_MS: u32 = 50;

/// How many times the whole 4-group sequence repeats per cycle.  The
/// controller samples on its own schedule; this many repetitions span
/// several of its read windows.
pub const OUTER_REPETITIONS: u8 = 30;

/// Build-time injector configuration.  There is no runtime or persisted
/// configuration surface on this device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectorConfig {
    /// Which selector character(s) to append after the preamble.
    pub region: RegionProfile,
    /// Outer repetition count.  [`OUTER_REPETITIONS`] in production;
    /// diagnostics builds drop it to 2 so a bench cycle finishes fast.
    pub outer_repetitions: u8,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            region: RegionProfile::All,
            outer_repetitions: OUTER_REPETITIONS,
        }
    }
}

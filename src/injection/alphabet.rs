//! The authentication character alphabet and region selector profiles.
//!
//! Every transmitted group is the fixed three-character preamble
//! followed by one selector character naming a console region.  The
//! byte values are ASCII; the drive controller compares them literally.

/// Preamble 'S'.
pub const SCEX_S: u8 = 0b0101_0011;
/// Preamble 'C'.
pub const SCEX_C: u8 = 0b0100_0011;
/// Preamble / EUR selector 'E'.
pub const SCEX_E: u8 = 0b0100_0101;
/// NA selector 'A'.
pub const SCEX_A: u8 = 0b0100_0001;
/// JPN selector 'I'.
pub const SCEX_I: u8 = 0b0100_1001;
/// Debug-unit selector 'W'.
pub const SCEX_W: u8 = 0b0101_0111;

/// The fixed preamble sent before every selector.
pub const PREAMBLE: [u8; 3] = [SCEX_S, SCEX_C, SCEX_E];

/// Selector slots per repetition.  Fixed at 4 even for single-selector
/// profiles; the drive firmware expects this framing.
pub const GROUP_SLOTS: usize = 4;

/// Slot order for [`RegionProfile::All`].
const ALL_SELECTORS: [u8; GROUP_SLOTS] = [SCEX_A, SCEX_E, SCEX_I, SCEX_W];

/// Which console region(s) the injected strings claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionProfile {
    /// Cycle all four selectors, one per slot.  Boots every region at
    /// the cost of longer worst-case boot times on some consoles.
    All,
    /// North America ('A').
    Na,
    /// Europe / PAL ('E').
    Eur,
    /// Japan ('I').
    Jpn,
    /// Net Yaroze development units ('W').
    Debug,
}

impl RegionProfile {
    /// Selector character for the given slot (0-based, `< GROUP_SLOTS`).
    /// Single-selector profiles ignore the slot.
    pub fn selector(self, slot: usize) -> u8 {
        match self {
            Self::All => ALL_SELECTORS[slot % GROUP_SLOTS],
            Self::Na => SCEX_A,
            Self::Eur => SCEX_E,
            Self::Jpn => SCEX_I,
            Self::Debug => SCEX_W,
        }
    }
}

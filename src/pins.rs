//! GPIO pin assignments for the DiscGate interposer board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! The board taps three signals between the laser pickup and the drive
//! controller; every other controller signal passes through untouched.

/// Digital input: disc-door sense switch.  Logic LOW = door closed.
/// Falling-edge interrupt source and the light-sleep wake source.
pub const DOOR_SENSE_GPIO: i32 = 4;

/// Authentication data line.  Held in high-impedance (input) mode except
/// while strings are being clocked out; the console-side pull-up makes a
/// released line read HIGH.
pub const DATA_GPIO: i32 = 5;

/// Gate transistor line.  Tri-stated in lockstep with the data line's
/// warm-up sequence; carries no encoded bits.
pub const GATE_GPIO: i32 = 6;

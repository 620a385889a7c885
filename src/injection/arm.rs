//! The arm flag — the only mutable state shared between contexts.
//!
//! Set to armed by the door ISR after a debounce-confirmed close,
//! cleared by the injection controller after a full transmission cycle.
//! No other writer exists.  A door event landing while a cycle is in
//! flight re-confirms the already-set flag and is otherwise absorbed;
//! cycles are never queued.

use core::sync::atomic::{AtomicBool, Ordering};

/// One-shot arming flag shared between the ISR and the main loop.
pub struct ArmFlag(AtomicBool);

impl ArmFlag {
    /// A disarmed flag.
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// An armed flag.  The production instance boots armed: console
    /// power-on is itself a disc-ready event, so the first main-loop
    /// pass injects without waiting for a door edge.
    pub const fn boot_armed() -> Self {
        Self(AtomicBool::new(true))
    }

    /// Request a transmission cycle.  ISR context.
    pub fn arm(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Clear the request.  Main context, only after a completed cycle.
    pub fn disarm(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_armed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

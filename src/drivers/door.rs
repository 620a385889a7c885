//! ISR-debounced door-sense driver.
//!
//! ## Hardware
//!
//! The door switch pulls the sense line LOW while the disc door is
//! closed.  The GPIO fires on the falling edge; the handler then trusts
//! only the level, re-sampled after a 50 ms debounce window, before it
//! arms a transmission cycle.
//!
//! ## Arming discipline
//!
//! One confirmed close = one armed flag.  The flag coalesces: closes
//! arriving while already armed (or while a cycle is running) set an
//! already-set flag.  Edge delivery is masked for the duration of the
//! debounce spin so switch bounce cannot stack handler invocations.

use embedded_hal::delay::DelayNs;

use crate::app::ports::DoorSensePort;
use crate::config::DOOR_DEBOUNCE_MS;
use crate::injection::arm::ArmFlag;

/// The production arm flag.  Written by the door ISR, cleared by the
/// injection controller.  Boots armed — see [`ArmFlag::boot_armed`].
pub static ARM_STATE: ArmFlag = ArmFlag::boot_armed();

/// Door-edge handler body.  Runs in interrupt context on hardware;
/// called directly with mock ports in tests.
///
/// The pending latch is acknowledged first, before any other work, so
/// re-enabling delivery at the end cannot replay a stale edge.  A
/// sample that reads open produces no further action.  Delivery is
/// re-enabled unconditionally: a bounce that fails the re-sample must
/// not leave the door interrupt dead.
pub fn on_door_edge<P, D>(door: &mut P, delay: &mut D, arm: &ArmFlag)
where
    P: DoorSensePort,
    D: DelayNs,
{
    door.clear_pending();

    if door.is_closed() {
        door.disable();
        delay.delay_ms(DOOR_DEBOUNCE_MS);
        if door.is_closed() {
            arm.arm();
        }
        door.enable();
    }
}

/// ISR trampoline target — registered on the door GPIO's falling edge
/// by [`crate::drivers::hw_init::init_isr_service`].
#[cfg(target_os = "espidf")]
pub fn door_isr_handler() {
    let mut door = hw::IsrDoorPort;
    let mut delay = esp_idf_hal::delay::Ets;
    on_door_edge(&mut door, &mut delay, &ARM_STATE);
}

#[cfg(target_os = "espidf")]
mod hw {
    use crate::app::ports::DoorSensePort;
    use crate::drivers::hw_init;

    /// Zero-sized port over the raw GPIO shims, for ISR context.
    pub struct IsrDoorPort;

    impl DoorSensePort for IsrDoorPort {
        fn clear_pending(&mut self) {
            // The GPIO ISR service acknowledges the interrupt status
            // before dispatching handlers; the latch is already clear
            // by the time this runs.
        }

        fn is_closed(&mut self) -> bool {
            hw_init::door_closed()
        }

        fn disable(&mut self) {
            hw_init::door_intr_disable();
        }

        fn enable(&mut self) {
            hw_init::door_intr_enable();
        }
    }
}

//! Hardware adapter — bridges the tapped GPIOs to the port traits.
//!
//! Together with `drivers::hw_init` this is the only code that touches
//! actual hardware.  On non-espidf targets the underlying shims are
//! no-ops, so the adapter still compiles for host-side runs; tests use
//! the recording mocks instead.

use embedded_hal::delay::DelayNs;

use crate::app::ports::{LineMode, LinePort, WakePort};
use crate::drivers::hw_init;
use crate::pins;

/// Concrete line + delay adapter over the tapped GPIOs.
///
/// Implements both [`LinePort`] and [`DelayNs`] so the injection core's
/// `LinePort + DelayNs` bound is satisfied by one object driving one
/// physical timeline.
pub struct HardwareAdapter;

impl HardwareAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl LinePort for HardwareAdapter {
    fn set_data(&mut self, mode: LineMode) {
        match mode {
            LineMode::HighImpedance => hw_init::line_release(pins::DATA_GPIO),
            LineMode::DriveLow => hw_init::line_drive_low(pins::DATA_GPIO),
        }
    }

    fn set_gate(&mut self, mode: LineMode) {
        match mode {
            LineMode::HighImpedance => hw_init::line_release(pins::GATE_GPIO),
            LineMode::DriveLow => hw_init::line_drive_low(pins::GATE_GPIO),
        }
    }
}

impl DelayNs for HardwareAdapter {
    #[cfg(target_os = "espidf")]
    fn delay_ns(&mut self, ns: u32) {
        esp_idf_hal::delay::Ets.delay_ns(ns);
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}

/// Light-sleep suspension: halts the CPU until the door-sense wake
/// source (configured in [`hw_init`]) fires.
pub struct LightSleepWake;

impl LightSleepWake {
    pub fn new() -> Self {
        Self
    }
}

impl WakePort for LightSleepWake {
    #[cfg(target_os = "espidf")]
    fn halt_until_door_edge(&mut self) {
        // SAFETY: light sleep with a configured GPIO wake source;
        // execution resumes here after the wake event.
        unsafe {
            esp_idf_svc::sys::esp_light_sleep_start();
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn halt_until_door_edge(&mut self) {
        // Host simulation: no hardware wake events exist; pace the loop.
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
}

//! DiscGate Firmware — Main Entry Point
//!
//! ```text
//! door edge (ISR) ──▶ debounce ──▶ ArmFlag ──▶ injection loop (main)
//!                                               │ warm-up ladder
//!                                               │ 30×4 preamble+selector groups
//!                                               │ release lines, disarm
//!                                               ▼
//!                                      light sleep until next edge
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod app;
pub mod config;
pub mod injection;

mod adapters;
mod drivers;
mod pins;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::hardware::{HardwareAdapter, LightSleepWake};
use adapters::log_sink::LogEventSink;
use app::events::AppEvent;
use app::ports::{EventSink, WakePort};
use config::InjectorConfig;
use drivers::door::ARM_STATE;
use injection::controller::InjectionController;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("DiscGate v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. One-shot peripheral + ISR setup ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // No recovery channel exists on this board — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = drivers::hw_init::init_isr_service() {
        // Without the door ISR the device can never re-arm.
        log::error!("ISR install failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Adapters + controller ──────────────────────────────
    let config = InjectorConfig::default();
    let mut hw = HardwareAdapter::new();
    let mut wake = LightSleepWake::new();
    let mut sink = LogEventSink::new();
    let mut controller = InjectionController::new(config);

    info!(
        "armed at boot, region={:?}, entering injection loop",
        controller.config().region
    );

    // ── 4. Injection loop ─────────────────────────────────────
    loop {
        if !controller.service(&mut hw, &ARM_STATE, &mut sink) {
            sink.emit(&AppEvent::WokeUnarmed);
        }
        sink.emit(&AppEvent::Halting);
        wake.halt_until_door_edge();
    }
}

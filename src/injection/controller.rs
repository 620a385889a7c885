//! The injection controller — the main-loop service.

use embedded_hal::delay::DelayNs;

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, LineMode, LinePort};
use crate::config::{DATA_WARMUP_MS, GATE_WARMUP_MS, InjectorConfig, SPINUP_SETTLE_MS};
use crate::injection::arm::ArmFlag;
use crate::injection::sequencer;

/// Services arm requests from the door monitor.
///
/// One `service` call per main-loop pass: if the flag is armed, take
/// over the lines, run the full transmission cycle, release the lines,
/// and only then disarm.  The flag is never cleared mid-cycle, so a
/// partial transmission can never eat a pending request.
pub struct InjectionController {
    config: InjectorConfig,
}

impl InjectionController {
    pub fn new(config: InjectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// Run one service pass.  Returns `true` if a cycle was transmitted.
    ///
    /// The warm-up ladder reproduces the window in which the drive
    /// controller starts listening after spin-up: data line low 50 ms
    /// after wake, gate low 850 ms later, first character 314 ms after
    /// that.
    pub fn service<H, E>(&mut self, hw: &mut H, arm: &ArmFlag, sink: &mut E) -> bool
    where
        H: LinePort + DelayNs,
        E: EventSink,
    {
        if !arm.is_armed() {
            return false;
        }

        sink.emit(&AppEvent::CycleStarted {
            region: self.config.region,
            repetitions: self.config.outer_repetitions,
        });

        hw.delay_ms(DATA_WARMUP_MS);
        hw.set_data(LineMode::DriveLow);
        hw.delay_ms(GATE_WARMUP_MS);
        hw.set_gate(LineMode::DriveLow);
        hw.delay_ms(SPINUP_SETTLE_MS);

        sequencer::run_cycle(hw, &self.config);

        // Hand the lines back to the laser↔controller link.
        hw.set_data(LineMode::HighImpedance);
        hw.set_gate(LineMode::HighImpedance);

        arm.disarm();
        sink.emit(&AppEvent::CycleCompleted {
            groups_sent: sequencer::groups_per_cycle(&self.config),
        });
        true
    }
}

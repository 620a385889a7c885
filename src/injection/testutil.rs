//! In-crate simulation bus for unit tests.
//!
//! Virtual clock: `DelayNs` advances simulated time instead of
//! sleeping, and every line-mode change is recorded with its timestamp
//! in milliseconds.

use embedded_hal::delay::DelayNs;

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, LineMode, LinePort};

pub struct SimBus {
    now_ns: u64,
    /// (at_ms, mode) per `set_data` call, in order.
    pub data: Vec<(u64, LineMode)>,
    /// (at_ms, mode) per `set_gate` call, in order.
    pub gate: Vec<(u64, LineMode)>,
}

impl SimBus {
    pub fn new() -> Self {
        Self {
            now_ns: 0,
            data: Vec::new(),
            gate: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ns / 1_000_000
    }

    /// Decode back-to-back 10-edge character frames from a data-line
    /// slice, returning (frame_start_ms, byte) pairs.
    pub fn decode_frames(ops: &[(u64, LineMode)]) -> Vec<(u64, u8)> {
        assert_eq!(ops.len() % 10, 0, "partial frame in trace");
        ops.chunks_exact(10)
            .map(|frame| {
                assert_eq!(frame[0].1, LineMode::HighImpedance, "start bit");
                assert_eq!(frame[9].1, LineMode::DriveLow, "end marker");
                let mut byte = 0u8;
                for (k, &(_, mode)) in frame[1..9].iter().enumerate() {
                    if mode == LineMode::DriveLow {
                        byte |= 1 << k;
                    }
                }
                (frame[0].0, byte)
            })
            .collect()
    }
}

impl LinePort for SimBus {
    fn set_data(&mut self, mode: LineMode) {
        let at = self.now_ms();
        self.data.push((at, mode));
    }

    fn set_gate(&mut self, mode: LineMode) {
        let at = self.now_ms();
        self.gate.push((at, mode));
    }
}

impl DelayNs for SimBus {
    fn delay_ns(&mut self, ns: u32) {
        self.now_ns += u64::from(ns);
    }
}

/// Sink that records every emitted event.
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

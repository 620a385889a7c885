//! Mock hardware adapters for integration tests.
//!
//! A virtual-clock bus: `DelayNs` advances simulated time instead of
//! sleeping, and every line-mode change is recorded with its timestamp
//! so tests can assert on the full electrical timeline without real
//! GPIO.

use discgate::app::events::AppEvent;
use discgate::app::ports::{DoorSensePort, EventSink, LineMode, LinePort};
use embedded_hal::delay::DelayNs;

// ── Line trace ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Data,
    Gate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChange {
    pub at_ms: u64,
    pub line: Line,
    pub mode: LineMode,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    now_ns: u64,
    pub trace: Vec<LineChange>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            now_ns: 0,
            trace: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ns / 1_000_000
    }

    pub fn changes(&self, line: Line) -> Vec<(u64, LineMode)> {
        self.trace
            .iter()
            .filter(|c| c.line == line)
            .map(|c| (c.at_ms, c.mode))
            .collect()
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

    /// The decoded character stream of a full service pass: everything
    /// on the data line between the warm-up takeover and the final
    /// release back to high-impedance.
    pub fn transmitted_characters(&self) -> Vec<u8> {
        let data = self.changes(Line::Data);
        assert!(data.len() >= 2, "no takeover/release bracket on the data line");
        assert_eq!(data[0].1, LineMode::DriveLow, "warm-up takeover");
        assert_eq!(
            data[data.len() - 1].1,
            LineMode::HighImpedance,
            "final release"
        );
        Self::decode_frames(&data[1..data.len() - 1])
            .iter()
            .map(|&(_, b)| b)
            .collect()
    }
}

impl LinePort for MockHardware {
    fn set_data(&mut self, mode: LineMode) {
        let at_ms = self.now_ms();
        self.trace.push(LineChange {
            at_ms,
            line: Line::Data,
            mode,
        });
    }

    fn set_gate(&mut self, mode: LineMode) {
        let at_ms = self.now_ms();
        self.trace.push(LineChange {
            at_ms,
            line: Line::Gate,
            mode,
        });
    }
}

impl DelayNs for MockHardware {
    fn delay_ns(&mut self, ns: u32) {
        self.now_ns += u64::from(ns);
    }
}

// ── Scripted door port ────────────────────────────────────────

/// Door-sense mock: successive level samples pop from a script, and
/// every capability call is journaled so tests can assert ordering.
pub struct ScriptedDoor {
    levels: Vec<bool>,
    next: usize,
    pub journal: Vec<String>,
    pub interrupts_enabled: bool,
}

#[allow(dead_code)]
impl ScriptedDoor {
    pub fn new(levels: &[bool]) -> Self {
        Self {
            levels: levels.to_vec(),
            next: 0,
            journal: Vec::new(),
            interrupts_enabled: true,
        }
    }
}

impl DoorSensePort for ScriptedDoor {
    fn clear_pending(&mut self) {
        self.journal.push("clear".into());
    }

    fn is_closed(&mut self) -> bool {
        let level = self.levels.get(self.next).copied().unwrap_or(false);
        self.next += 1;
        self.journal.push(format!("sample={}", level));
        level
    }

    fn disable(&mut self) {
        self.interrupts_enabled = false;
        self.journal.push("disable".into());
    }

    fn enable(&mut self) {
        self.interrupts_enabled = true;
        self.journal.push("enable".into());
    }
}

// ── Recording sink ────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
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

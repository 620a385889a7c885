//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC in production).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::CycleStarted {
                region,
                repetitions,
            } => {
                info!("CYCLE | start | region={:?} reps={}", region, repetitions);
            }
            AppEvent::CycleCompleted { groups_sent } => {
                info!("CYCLE | done | groups={}", groups_sent);
            }
            AppEvent::WokeUnarmed => {
                info!("WAKE  | unarmed (bounce or door open)");
            }
            AppEvent::Halting => {
                info!("HALT  | suspending until next door edge");
            }
        }
    }
}

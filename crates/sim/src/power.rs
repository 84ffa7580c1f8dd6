//! Support power source used by scripted scenarios.
//!
//! A scripted power has no game effect. It records every callback into a
//! [`Journal`] shared by all sources of one simulation, stamped with the step
//! that was being processed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use powers_core::{EntityId, Location, Order, PowerKey, SupportPower, SupportPowerInfo};
use serde::Serialize;
use strum::{AsRefStr, Display};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum JournalEvent {
    Charging,
    Charged,
    Activated,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub frame: u64,
    pub event: JournalEvent,
    /// Power key for notifications, order string for activations.
    pub key: String,
    pub host: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Location>,
}

/// Ordered record of power callbacks.
#[derive(Debug, Default)]
pub struct Journal {
    frame: AtomicU64,
    entries: Mutex<Vec<JournalEntry>>,
}

impl Journal {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Sets the step stamped on subsequent entries.
    pub fn set_frame(&self, frame: u64) {
        self.frame.store(frame, Ordering::Relaxed);
    }

    pub fn frame(&self) -> u64 {
        self.frame.load(Ordering::Relaxed)
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.lock().clone()
    }

    fn record(&self, event: JournalEvent, key: &str, host: EntityId, target: Option<Location>) {
        let entry = JournalEntry {
            frame: self.frame(),
            event,
            key: key.to_owned(),
            host,
            target,
        };
        info!(
            target: "powers::sim",
            frame = entry.frame,
            event = %entry.event,
            key = %entry.key,
            host = %entry.host,
            "power callback"
        );
        self.lock().push(entry);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<JournalEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Power source that only journals its callbacks.
#[derive(Debug)]
pub struct ScriptedPower {
    info: SupportPowerInfo,
    journal: Arc<Journal>,
}

impl ScriptedPower {
    pub fn shared(info: SupportPowerInfo, journal: &Arc<Journal>) -> Arc<dyn SupportPower> {
        Arc::new(Self {
            info,
            journal: Arc::clone(journal),
        })
    }
}

impl SupportPower for ScriptedPower {
    fn info(&self) -> &SupportPowerInfo {
        &self.info
    }

    fn activate(&self, host: EntityId, order: &Order) {
        self.journal.record(
            JournalEvent::Activated,
            &order.order_string,
            host,
            order.target_location,
        );
    }

    fn charging(&self, host: EntityId, key: &PowerKey) {
        self.journal
            .record(JournalEvent::Charging, key.as_str(), host, None);
    }

    fn charged(&self, host: EntityId, key: &PowerKey) {
        self.journal
            .record(JournalEvent::Charged, key.as_str(), host, None);
    }
}

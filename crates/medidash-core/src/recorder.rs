//! In-memory `StoreObserver` that keeps every event it hears.
//!
//! `ChangeRecorder` numbers events in arrival order starting at 0. It is the
//! observer the demo and the tests attach to a store to see exactly which
//! mutations took effect; a no-op mutation leaves no entry.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use medidash_contracts::event::StoreEvent;

use crate::traits::StoreObserver;

/// One observed event and its position in the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// Monotonically increasing position, starting at 0.
    pub sequence: u64,
    pub event: StoreEvent,
}

struct RecorderState {
    events: Vec<RecordedEvent>,
    next_sequence: u64,
}

/// An append-only log of store events.
///
/// Clones share the same log, so one clone can be boxed into the store while
/// another is kept for inspection.
#[derive(Clone)]
pub struct ChangeRecorder {
    state: Arc<Mutex<RecorderState>>,
}

impl ChangeRecorder {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RecorderState {
                events: Vec::new(),
                next_sequence: 0,
            })),
        }
    }

    /// A snapshot of everything recorded so far, oldest first.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.state.lock().expect("recorder lock poisoned").events.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().expect("recorder lock poisoned").events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The most recent event, if any.
    pub fn last(&self) -> Option<StoreEvent> {
        self.state
            .lock()
            .expect("recorder lock poisoned")
            .events
            .last()
            .map(|r| r.event.clone())
    }
}

impl Default for ChangeRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreObserver for ChangeRecorder {
    fn on_event(&self, event: &StoreEvent) {
        let mut state = self.state.lock().expect("recorder lock poisoned");
        let sequence = state.next_sequence;
        debug!(sequence, ?event, "store event recorded");
        state.events.push(RecordedEvent {
            sequence,
            event: event.clone(),
        });
        state.next_sequence += 1;
    }
}

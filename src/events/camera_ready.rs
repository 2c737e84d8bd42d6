// SPDX-License-Identifier: GPL-3.0-only

//! Camera readiness event

use crate::constants::{EVENT_ON_CAMERA_READY, EVENT_POOL_CAPACITY};
use crate::events::pool::EventPool;
use crate::events::sink::EventSink;
use serde_json::{Value, json};
use tracing::debug;

static EVENTS_POOL: EventPool<CameraReadyEvent> = EventPool::new(EVENT_POOL_CAPACITY);

/// Event fired once a camera view becomes operational
///
/// Carries no payload beyond the address. Readiness notifications for the
/// same target all coalesce, only the newest one matters.
#[derive(Debug, Default)]
pub struct CameraReadyEvent {
    target_id: i32,
}

impl CameraReadyEvent {
    /// Acquire an event from the pool, or allocate one, and initialize it
    pub fn obtain(target_id: i32) -> Self {
        let mut event = EVENTS_POOL.acquire().unwrap_or_default();
        event.target_id = target_id;
        event
    }

    /// UI element this event is addressed to
    pub fn target_id(&self) -> i32 {
        self.target_id
    }

    /// Name the payload is delivered under
    pub fn event_name(&self) -> &'static str {
        EVENT_ON_CAMERA_READY
    }

    /// All readiness events for a target share one key
    pub fn coalescing_key(&self) -> u16 {
        0
    }

    /// Serialize and deliver to `sink`, then recycle the event shell
    pub fn dispatch<S: EventSink>(self, sink: &mut S) {
        debug!(target_id = self.target_id, "Dispatching camera ready event");
        sink.receive_event(self.target_id, self.event_name(), self.serialize_event_data());
        EVENTS_POOL.release(self);
    }

    /// Build the wire payload, an empty object
    pub fn serialize_event_data(&self) -> Value {
        json!({})
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Camera mount failure event

use crate::constants::{EVENT_ON_MOUNT_ERROR, EVENT_POOL_CAPACITY};
use crate::events::pool::EventPool;
use crate::events::sink::EventSink;
use serde_json::{Value, json};
use tracing::debug;

static EVENTS_POOL: EventPool<CameraMountErrorEvent> = EventPool::new(EVENT_POOL_CAPACITY);

/// Event fired when a camera view fails to start
///
/// The failure travels to the UI consumer as event data. Nothing on this
/// path returns an error; a view that cannot mount is reported, not
/// propagated.
#[derive(Debug, Default)]
pub struct CameraMountErrorEvent {
    target_id: i32,
    message: String,
}

impl CameraMountErrorEvent {
    /// Acquire an event from the pool, or allocate one, and initialize it
    pub fn obtain(target_id: i32, message: impl Into<String>) -> Self {
        let mut event = EVENTS_POOL.acquire().unwrap_or_default();
        event.target_id = target_id;
        event.message = message.into();
        event
    }

    /// UI element this event is addressed to
    pub fn target_id(&self) -> i32 {
        self.target_id
    }

    /// Failure description carried to the consumer
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name the payload is delivered under
    pub fn event_name(&self) -> &'static str {
        EVENT_ON_MOUNT_ERROR
    }

    /// All mount failures for a target share one key
    pub fn coalescing_key(&self) -> u16 {
        0
    }

    /// Serialize and deliver to `sink`, then recycle the event shell
    pub fn dispatch<S: EventSink>(mut self, sink: &mut S) {
        let payload = self.serialize_event_data();
        debug!(
            target_id = self.target_id,
            error = %self.message,
            "Dispatching mount error event"
        );
        sink.receive_event(self.target_id, self.event_name(), payload);

        self.message.clear();
        EVENTS_POOL.release(self);
    }

    /// Build the wire payload
    pub fn serialize_event_data(&self) -> Value {
        json!({ "error": self.message })
    }
}

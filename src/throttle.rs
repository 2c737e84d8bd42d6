// SPDX-License-Identifier: GPL-3.0-only

//! Duplicate event suppression
//!
//! Detection events fire for every analyzed frame, and a static scene
//! produces the same payload many times per second. The throttle sits on
//! the consumer side of the sink and drops an event when an identical
//! payload already went to the same target within a short window, so
//! downstream handlers see changes rather than repeats. Suppression is an
//! optimization: on any doubt the event goes through.

use crate::constants::EVENT_THROTTLE_WINDOW;
use crate::events::sink::EventSink;
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{trace, warn};

/// Tracks the last delivered payload per target and event kind
///
/// Identity is string equality of the serialized payload. Two payloads that
/// differ anywhere, a moved bounding box included, never suppress each
/// other.
#[derive(Debug)]
pub struct EventThrottle {
    window: Duration,
    last_delivered: HashMap<(i32, String), (String, Instant)>,
}

impl EventThrottle {
    /// Throttle with the standard delivery window
    pub fn new() -> Self {
        Self::with_window(EVENT_THROTTLE_WINDOW)
    }

    /// Throttle with a custom window, zero disables suppression
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            last_delivered: HashMap::new(),
        }
    }

    /// Whether `payload` should be delivered to `target_id` now
    ///
    /// Returns `false` only when the identical payload went out to the same
    /// target and kind less than the window ago. Admission records the
    /// delivery, so call this once per candidate event; a suppressed event
    /// does not extend the window.
    pub fn admit(&mut self, target_id: i32, event_name: &str, payload: &Value) -> bool {
        let serialized = match serde_json::to_string(payload) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!(error = %e, "Failed to serialize payload for throttling, delivering");
                return true;
            }
        };

        let key = (target_id, Self::kind_key(event_name, payload).to_string());
        let now = Instant::now();

        if let Some((last_payload, last_time)) = self.last_delivered.get(&key) {
            if *last_payload == serialized && now.duration_since(*last_time) < self.window {
                return false;
            }
        }

        self.last_delivered.insert(key, (serialized, now));
        true
    }

    /// Payload `type` field when present, delivery name otherwise
    ///
    /// Detection payloads self-describe their kind; lifecycle events fall
    /// back to the name they are delivered under.
    fn kind_key<'a>(event_name: &'a str, payload: &'a Value) -> &'a str {
        payload
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(event_name)
    }
}

impl Default for EventThrottle {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink decorator that drops duplicates inside the throttle window
///
/// Wraps the real delivery sink. Everything the throttle admits is
/// forwarded untouched.
#[derive(Debug)]
pub struct ThrottledSink<S> {
    inner: S,
    throttle: EventThrottle,
}

impl<S: EventSink> ThrottledSink<S> {
    /// Wrap `inner` with the standard delivery window
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            throttle: EventThrottle::new(),
        }
    }

    /// Wrap `inner` with a custom window, zero disables suppression
    pub fn with_window(inner: S, window: Duration) -> Self {
        Self {
            inner,
            throttle: EventThrottle::with_window(window),
        }
    }

    /// The wrapped sink
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap, discarding the throttle state
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EventSink> EventSink for ThrottledSink<S> {
    fn receive_event(&mut self, target_id: i32, event_name: &str, payload: Value) {
        if self.throttle.admit(target_id, event_name, &payload) {
            self.inner.receive_event(target_id, event_name, payload);
        } else {
            trace!(target_id, event = event_name, "Dropped duplicate event");
        }
    }
}

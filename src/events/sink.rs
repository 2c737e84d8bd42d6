// SPDX-License-Identifier: GPL-3.0-only

//! Event delivery sink

use serde_json::Value;

/// Receiver side of the event layer
///
/// Implemented by whatever owns the UI event queue. The event types in this
/// crate are producers only: they serialize themselves, hand the payload
/// over, and never read anything back.
///
/// # Example
///
/// ```
/// use camera_events::EventSink;
/// use serde_json::Value;
///
/// #[derive(Default)]
/// struct QueueSink {
///     delivered: Vec<(i32, String, Value)>,
/// }
///
/// impl EventSink for QueueSink {
///     fn receive_event(&mut self, target_id: i32, event_name: &str, payload: Value) {
///         self.delivered.push((target_id, event_name.to_string(), payload));
///     }
/// }
/// ```
pub trait EventSink {
    /// Deliver a serialized event addressed to the UI element `target_id`
    fn receive_event(&mut self, target_id: i32, event_name: &str, payload: Value);
}

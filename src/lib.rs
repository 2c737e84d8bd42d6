// SPDX-License-Identifier: GPL-3.0-only

//! Camera Events - detection event layer for camera views
//!
//! This library packages the output of a camera frame-analysis pipeline into
//! serialized events and hands them to a delivery sink owned by the UI
//! framework. Events are pooled for reuse on the per-frame hot path, carry a
//! coalescing key so the delivery queue can replace stale undelivered
//! notifications, and are consumed by dispatch so a delivered event cannot
//! fire twice.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`events`]: pooled event types and the [`EventSink`] delivery trait
//! - [`geometry`]: frame dimensions, scale factors, and detection records
//! - [`formats`]: barcode format code lookup
//! - [`throttle`]: consumer-side duplicate suppression
//! - [`constants`]: event names and tunables
//!
//! # Example
//!
//! ```
//! use camera_events::{
//!     BarcodeRecord, BarcodesDetectedEvent, BoundingBox, DetectionBatch, EventSink,
//!     ImageDimensions, ScaleFactors, formats,
//! };
//!
//! #[derive(Default)]
//! struct QueueSink {
//!     delivered: Vec<(i32, String, serde_json::Value)>,
//! }
//!
//! impl EventSink for QueueSink {
//!     fn receive_event(&mut self, target_id: i32, event_name: &str, payload: serde_json::Value) {
//!         self.delivered.push((target_id, event_name.to_string(), payload));
//!     }
//! }
//!
//! let mut batch = DetectionBatch::new();
//! batch.put(0, BarcodeRecord {
//!     data: Some("https://example.com".to_string()),
//!     format: formats::QR_CODE,
//!     bounds: BoundingBox::new(10, 20, 30, 40),
//! });
//!
//! let dimensions = ImageDimensions::new(1280, 720);
//! let scale = ScaleFactors::for_display(640.0, 360.0, dimensions);
//! let event = BarcodesDetectedEvent::obtain(42, batch, dimensions, scale);
//!
//! let mut sink = QueueSink::default();
//! event.dispatch(&mut sink);
//!
//! let (target, name, payload) = &sink.delivered[0];
//! assert_eq!(*target, 42);
//! assert_eq!(name, "onBarcodesDetected");
//! assert_eq!(payload["barcodes"][0]["data"], "https://example.com");
//! ```

pub mod constants;
pub mod events;
pub mod formats;
pub mod geometry;
pub mod throttle;

// Re-export commonly used types
pub use events::{BarcodesDetectedEvent, CameraMountErrorEvent, CameraReadyEvent, EventSink};
pub use geometry::{BarcodeRecord, BoundingBox, DetectionBatch, ImageDimensions, ScaleFactors};
pub use throttle::{EventThrottle, ThrottledSink};

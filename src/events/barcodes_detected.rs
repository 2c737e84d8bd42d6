// SPDX-License-Identifier: GPL-3.0-only

//! Barcode detection event
//!
//! Packages the barcodes found in one analyzed frame into the serialized
//! message the UI consumer parses. Instances come from a bounded reuse pool
//! and are consumed by dispatch, so a delivered event can never be fired
//! twice.

use crate::constants::{EVENT_ON_BARCODES_DETECTED, EVENT_POOL_CAPACITY};
use crate::events::pool::EventPool;
use crate::events::sink::EventSink;
use crate::formats;
use crate::geometry::{DetectionBatch, ImageDimensions, ScaleFactors};
use serde_json::{Value, json};
use tracing::{debug, trace};

static EVENTS_POOL: EventPool<BarcodesDetectedEvent> = EventPool::new(EVENT_POOL_CAPACITY);

/// Event carrying the barcodes detected in one camera frame
///
/// Single use: [`dispatch`](Self::dispatch) consumes the event and returns
/// the cleared shell to the pool. Bounding boxes serialize rescaled from
/// detector pixel space into display space using the scale factors captured
/// at [`obtain`](Self::obtain); the frame dimensions ride along for
/// consumers that need the source geometry but are not part of the payload.
#[derive(Debug, Default)]
pub struct BarcodesDetectedEvent {
    target_id: i32,
    batch: DetectionBatch,
    dimensions: ImageDimensions,
    scale: ScaleFactors,
}

impl BarcodesDetectedEvent {
    /// Acquire an event from the pool, or allocate one, and initialize it
    pub fn obtain(
        target_id: i32,
        batch: DetectionBatch,
        dimensions: ImageDimensions,
        scale: ScaleFactors,
    ) -> Self {
        let mut event = EVENTS_POOL.acquire().unwrap_or_else(|| {
            trace!("Barcode event pool empty, allocating");
            Self::default()
        });
        event.init(target_id, batch, dimensions, scale);
        event
    }

    fn init(
        &mut self,
        target_id: i32,
        batch: DetectionBatch,
        dimensions: ImageDimensions,
        scale: ScaleFactors,
    ) {
        self.target_id = target_id;
        self.batch = batch;
        self.dimensions = dimensions;
        self.scale = scale;
    }

    /// UI element this event is addressed to
    pub fn target_id(&self) -> i32 {
        self.target_id
    }

    /// Name the payload is delivered under
    pub fn event_name(&self) -> &'static str {
        EVENT_ON_BARCODES_DETECTED
    }

    /// Dimensions of the frame the batch was detected in
    pub fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    /// Key the delivery queue uses to replace stale undelivered events
    ///
    /// Events carrying different barcode counts must never merge, so the key
    /// is the batch size. The delivery layer stores keys as 16-bit signed
    /// values, so sizes are capped there; batches beyond the cap share a key
    /// and that collision is accepted.
    pub fn coalescing_key(&self) -> u16 {
        if self.batch.len() > i16::MAX as usize {
            return i16::MAX as u16;
        }
        self.batch.len() as u16
    }

    /// Serialize and deliver to `sink`, then recycle the event shell
    pub fn dispatch<S: EventSink>(mut self, sink: &mut S) {
        let payload = self.serialize_event_data();
        debug!(
            target_id = self.target_id,
            count = self.batch.len(),
            "Dispatching barcode detection event"
        );
        sink.receive_event(self.target_id, self.event_name(), payload);

        self.batch.clear();
        EVENTS_POOL.release(self);
    }

    /// Build the wire payload
    ///
    /// The shape is a compatibility surface consumers parse:
    /// `{ "type": "barcode", "target": <id>, "barcodes": [{ "data", "type",
    /// "bounds": { "origin": { "x", "y" }, "size": { "width", "height" } } }] }`.
    /// Records appear in batch insertion order. Bounds are multiplied by the
    /// scale factors with no rounding, and undecoded records serialize their
    /// `data` as JSON null.
    pub fn serialize_event_data(&self) -> Value {
        let barcodes: Vec<Value> = self
            .batch
            .iter()
            .map(|record| {
                json!({
                    "data": record.data.as_deref(),
                    "type": formats::format_label(record.format),
                    "bounds": {
                        "origin": {
                            "x": record.bounds.left as f64 * self.scale.x,
                            "y": record.bounds.top as f64 * self.scale.y,
                        },
                        "size": {
                            "width": record.bounds.width as f64 * self.scale.x,
                            "height": record.bounds.height as f64 * self.scale.y,
                        },
                    },
                })
            })
            .collect();

        json!({
            "type": "barcode",
            "barcodes": barcodes,
            "target": self.target_id,
        })
    }
}

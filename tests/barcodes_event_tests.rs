// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the barcode detection event contract

use camera_events::{
    BarcodeRecord, BarcodesDetectedEvent, BoundingBox, DetectionBatch, EventSink,
    ImageDimensions, ScaleFactors, formats,
};
use serde_json::Value;

/// Sink recording everything it receives
#[derive(Default)]
struct RecordingSink {
    delivered: Vec<(i32, String, Value)>,
}

impl EventSink for RecordingSink {
    fn receive_event(&mut self, target_id: i32, event_name: &str, payload: Value) {
        self.delivered
            .push((target_id, event_name.to_string(), payload));
    }
}

fn record(data: Option<&str>, format: i32, bounds: BoundingBox) -> BarcodeRecord {
    BarcodeRecord {
        data: data.map(str::to_string),
        format,
        bounds,
    }
}

#[test]
fn test_empty_batch_serializes_empty_list() {
    let event = BarcodesDetectedEvent::obtain(
        7,
        DetectionBatch::new(),
        ImageDimensions::new(640, 480),
        ScaleFactors::IDENTITY,
    );

    let payload = event.serialize_event_data();
    assert_eq!(payload["type"], "barcode");
    assert_eq!(payload["target"], 7);
    assert_eq!(payload["barcodes"], serde_json::json!([]));
}

#[test]
fn test_bounds_rescale_without_rounding() {
    let mut batch = DetectionBatch::new();
    batch.put(
        0,
        record(Some("hello"), formats::QR_CODE, BoundingBox::new(10, 20, 30, 40)),
    );

    let event = BarcodesDetectedEvent::obtain(
        1,
        batch,
        ImageDimensions::new(1280, 720),
        ScaleFactors::new(2.0, 0.5),
    );

    let bounds = &event.serialize_event_data()["barcodes"][0]["bounds"];
    assert_eq!(bounds["origin"]["x"], 20.0);
    assert_eq!(bounds["origin"]["y"], 10.0);
    assert_eq!(bounds["size"]["width"], 60.0);
    assert_eq!(bounds["size"]["height"], 20.0);
}

#[test]
fn test_fractional_scale_keeps_precision() {
    let mut batch = DetectionBatch::new();
    batch.put(
        0,
        record(Some("x"), formats::EAN_13, BoundingBox::new(3, 0, 7, 1)),
    );

    let event = BarcodesDetectedEvent::obtain(
        1,
        batch,
        ImageDimensions::new(640, 480),
        ScaleFactors::new(1.0 / 3.0, 1.0),
    );

    let payload = event.serialize_event_data();
    let x = payload["barcodes"][0]["bounds"]["origin"]["x"]
        .as_f64()
        .unwrap();
    assert!((x - 1.0).abs() < 1e-12, "expected 3 * 1/3 = 1.0, got {}", x);
    let width = payload["barcodes"][0]["bounds"]["size"]["width"]
        .as_f64()
        .unwrap();
    assert!((width - 7.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_unmapped_format_serializes_fallback_label() {
    let mut batch = DetectionBatch::new();
    batch.put(0, record(Some("data"), 999, BoundingBox::default()));

    let event = BarcodesDetectedEvent::obtain(
        1,
        batch,
        ImageDimensions::new(640, 480),
        ScaleFactors::IDENTITY,
    );

    let payload = event.serialize_event_data();
    assert_eq!(payload["barcodes"][0]["type"], formats::UNKNOWN_FORMAT);
}

#[test]
fn test_barcodes_keep_batch_insertion_order() {
    let mut batch = DetectionBatch::new();
    for (slot, text) in [(9, "first"), (2, "second"), (5, "third")] {
        batch.put(slot, record(Some(text), formats::CODE_128, BoundingBox::default()));
    }

    let event = BarcodesDetectedEvent::obtain(
        1,
        batch,
        ImageDimensions::new(640, 480),
        ScaleFactors::IDENTITY,
    );

    let payload = event.serialize_event_data();
    let texts: Vec<_> = payload["barcodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["data"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[test]
fn test_coalescing_key_tracks_batch_size() {
    for size in [0usize, 1, 3, 40] {
        let batch = DetectionBatch::from_records(vec![BarcodeRecord::default(); size]);
        let event = BarcodesDetectedEvent::obtain(
            1,
            batch,
            ImageDimensions::new(640, 480),
            ScaleFactors::IDENTITY,
        );
        assert_eq!(event.coalescing_key() as usize, size);
    }
}

#[test]
fn test_coalescing_key_saturates() {
    let batch = DetectionBatch::from_records(vec![BarcodeRecord::default(); 40_000]);
    let event = BarcodesDetectedEvent::obtain(
        1,
        batch,
        ImageDimensions::new(640, 480),
        ScaleFactors::IDENTITY,
    );
    assert_eq!(event.coalescing_key(), 32_767);
}

#[test]
fn test_dispatch_delivers_addressed_payload() {
    let mut batch = DetectionBatch::new();
    batch.put(
        0,
        record(Some("QR!"), formats::QR_CODE, BoundingBox::new(1, 2, 3, 4)),
    );

    let event = BarcodesDetectedEvent::obtain(
        11,
        batch,
        ImageDimensions::new(640, 480),
        ScaleFactors::IDENTITY,
    );

    let mut sink = RecordingSink::default();
    event.dispatch(&mut sink);

    assert_eq!(sink.delivered.len(), 1);
    let (target, name, payload) = &sink.delivered[0];
    assert_eq!(*target, 11);
    assert_eq!(name, "onBarcodesDetected");
    assert_eq!(payload["type"], "barcode");
    assert_eq!(payload["target"], 11);
    assert_eq!(payload["barcodes"][0]["data"], "QR!");
}

#[test]
fn test_recycled_event_carries_no_stale_state() {
    let mut batch = DetectionBatch::new();
    batch.put(
        0,
        record(Some("stale"), formats::AZTEC, BoundingBox::new(5, 5, 5, 5)),
    );
    let first = BarcodesDetectedEvent::obtain(
        1,
        batch,
        ImageDimensions::new(640, 480),
        ScaleFactors::new(3.0, 3.0),
    );

    let mut sink = RecordingSink::default();
    first.dispatch(&mut sink);

    // The next obtain may reuse the shell dispatched above; every field
    // must be freshly initialized either way
    let second = BarcodesDetectedEvent::obtain(
        2,
        DetectionBatch::new(),
        ImageDimensions::new(320, 240),
        ScaleFactors::IDENTITY,
    );

    assert_eq!(second.target_id(), 2);
    assert_eq!(second.coalescing_key(), 0);
    assert_eq!(second.dimensions(), ImageDimensions::new(320, 240));

    let payload = second.serialize_event_data();
    assert_eq!(payload["target"], 2);
    assert_eq!(payload["barcodes"], serde_json::json!([]));
}

#[test]
fn test_payload_parses_back_into_expected_shape() {
    let mut batch = DetectionBatch::new();
    batch.put(
        0,
        record(None, formats::PDF417, BoundingBox::new(0, 0, 100, 50)),
    );
    batch.put(
        1,
        record(Some("ticket"), formats::PDF417, BoundingBox::new(10, 10, 80, 40)),
    );

    let event = BarcodesDetectedEvent::obtain(
        5,
        batch,
        ImageDimensions::new(640, 480),
        ScaleFactors::new(0.5, 0.5),
    );

    let text = event.serialize_event_data().to_string();
    let parsed: Value = serde_json::from_str(&text).expect("payload must be valid JSON");

    assert_eq!(parsed["type"], "barcode");
    let barcodes = parsed["barcodes"].as_array().expect("barcodes is a list");
    assert_eq!(barcodes.len(), 2);
    assert!(barcodes[0]["data"].is_null());
    assert_eq!(barcodes[1]["data"], "ticket");
    assert_eq!(barcodes[1]["bounds"]["origin"]["x"], 5.0);
    assert_eq!(barcodes[1]["bounds"]["size"]["height"], 20.0);
}

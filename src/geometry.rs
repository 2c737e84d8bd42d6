// SPDX-License-Identifier: GPL-3.0-only

//! Frame geometry and detection records
//!
//! Shared data types exchanged between the frame-analysis pipeline and the
//! event layer: source frame dimensions, detector-to-display scale factors,
//! and the per-frame batch of detected barcodes.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of an analyzed camera frame
///
/// `rotation` is the sensor mounting rotation in degrees clockwise. Frames
/// from sideways-mounted sensors report their unrotated buffer size here, so
/// consumers mapping onto a display must swap the axes when
/// [`is_landscape`](Self::is_landscape) holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
    /// Sensor rotation in degrees clockwise, 0 when unrotated
    pub rotation: i32,
}

impl ImageDimensions {
    /// Dimensions of an unrotated frame
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rotation: 0,
        }
    }

    /// Dimensions of a frame from a rotated sensor
    pub fn with_rotation(width: u32, height: u32, rotation: i32) -> Self {
        Self {
            width,
            height,
            rotation,
        }
    }

    /// Whether the sensor rotation swaps the frame axes relative to the display
    pub fn is_landscape(&self) -> bool {
        self.rotation.rem_euclid(180) == 90
    }
}

/// Multipliers taking detector pixel coordinates to display coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

impl ScaleFactors {
    /// No scaling, detector space equals display space
    pub const IDENTITY: ScaleFactors = ScaleFactors { x: 1.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale factors mapping frames of `dimensions` onto a display area
    ///
    /// Divides the displayed size by the frame size per axis, using the
    /// swapped frame axes when the sensor is mounted sideways. Degenerate
    /// zero-sized frames yield the identity scale rather than an infinity
    /// that would poison every coordinate downstream.
    pub fn for_display(
        display_width: f64,
        display_height: f64,
        dimensions: ImageDimensions,
    ) -> Self {
        let (frame_width, frame_height) = if dimensions.is_landscape() {
            (dimensions.height, dimensions.width)
        } else {
            (dimensions.width, dimensions.height)
        };

        if frame_width == 0 || frame_height == 0 {
            return Self::IDENTITY;
        }

        Self {
            x: display_width / frame_width as f64,
            y: display_height / frame_height as f64,
        }
    }
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Axis-aligned bounding rectangle in detector pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// A single barcode found by the detector
///
/// `data` is the decoded display text, absent when the detector located a
/// symbol but could not decode it. `format` is the detector's integer format
/// code; it is mapped to a label by
/// [`formats::format_label`](crate::formats::format_label) at serialization
/// time, never before.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BarcodeRecord {
    pub data: Option<String>,
    pub format: i32,
    pub bounds: BoundingBox,
}

/// Barcode records detected in one analyzed frame
///
/// Records are keyed by the detector's dense integer slot and iterate in
/// insertion order, so consumers see them in the order the detector reported
/// them. Built once per frame and handed to the event whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionBatch {
    slots: Vec<(u32, BarcodeRecord)>,
}

impl DetectionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a batch from records in order, assigning sequential slots
    pub fn from_records(records: impl IntoIterator<Item = BarcodeRecord>) -> Self {
        Self {
            slots: records
                .into_iter()
                .enumerate()
                .map(|(slot, record)| (slot as u32, record))
                .collect(),
        }
    }

    /// Store `record` under `slot`, replacing any record already there
    pub fn put(&mut self, slot: u32, record: BarcodeRecord) {
        if let Some(entry) = self.slots.iter_mut().find(|(key, _)| *key == slot) {
            entry.1 = record;
        } else {
            self.slots.push((slot, record));
        }
    }

    pub fn get(&self, slot: u32) -> Option<&BarcodeRecord> {
        self.slots
            .iter()
            .find(|(key, _)| *key == slot)
            .map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &BarcodeRecord> {
        self.slots.iter().map(|(_, record)| record)
    }

    /// Drop all records, keeping the allocation for reuse
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_landscape() {
        assert!(!ImageDimensions::new(640, 480).is_landscape());
        assert!(ImageDimensions::with_rotation(640, 480, 90).is_landscape());
        assert!(!ImageDimensions::with_rotation(640, 480, 180).is_landscape());
        assert!(ImageDimensions::with_rotation(640, 480, 270).is_landscape());
        assert!(ImageDimensions::with_rotation(640, 480, -90).is_landscape());
        assert!(ImageDimensions::with_rotation(640, 480, 450).is_landscape());
    }

    #[test]
    fn test_for_display_upright() {
        let scale = ScaleFactors::for_display(320.0, 240.0, ImageDimensions::new(640, 480));
        assert!((scale.x - 0.5).abs() < f64::EPSILON);
        assert!((scale.y - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_for_display_swaps_axes_when_rotated() {
        let dimensions = ImageDimensions::with_rotation(640, 480, 90);
        let scale = ScaleFactors::for_display(480.0, 640.0, dimensions);
        assert!((scale.x - 1.0).abs() < f64::EPSILON);
        assert!((scale.y - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_for_display_zero_frame_is_identity() {
        let scale = ScaleFactors::for_display(320.0, 240.0, ImageDimensions::new(0, 480));
        assert_eq!(scale, ScaleFactors::IDENTITY);
    }

    #[test]
    fn test_batch_put_replaces_in_place() {
        let mut batch = DetectionBatch::new();
        batch.put(5, BarcodeRecord {
            data: Some("first".to_string()),
            ..Default::default()
        });
        batch.put(2, BarcodeRecord {
            data: Some("second".to_string()),
            ..Default::default()
        });
        batch.put(5, BarcodeRecord {
            data: Some("replaced".to_string()),
            ..Default::default()
        });

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.get(5).and_then(|r| r.data.as_deref()), Some("replaced"));

        // Replacement must not move the record to the back
        let order: Vec<_> = batch.iter().filter_map(|r| r.data.as_deref()).collect();
        assert_eq!(order, ["replaced", "second"]);
    }

    #[test]
    fn test_batch_iterates_in_insertion_order() {
        let mut batch = DetectionBatch::new();
        for (slot, text) in [(7, "a"), (0, "b"), (3, "c")] {
            batch.put(slot, BarcodeRecord {
                data: Some(text.to_string()),
                ..Default::default()
            });
        }

        let order: Vec<_> = batch.iter().filter_map(|r| r.data.as_deref()).collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn test_from_records_assigns_sequential_slots() {
        let batch = DetectionBatch::from_records([
            BarcodeRecord::default(),
            BarcodeRecord {
                data: Some("x".to_string()),
                ..Default::default()
            },
        ]);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.get(1).and_then(|r| r.data.as_deref()), Some("x"));
    }
}

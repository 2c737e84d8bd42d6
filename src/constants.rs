// SPDX-License-Identifier: GPL-3.0-only

//! Crate-wide constants

use std::time::Duration;

/// Number of spent event shells each event type keeps for reuse
///
/// Matches the per-event-type pool size of the delivery framework this layer
/// feeds. Once this many events are in flight at once, `obtain` falls back to
/// plain allocation.
pub const EVENT_POOL_CAPACITY: usize = 3;

/// Name under which barcode detection payloads are delivered
pub const EVENT_ON_BARCODES_DETECTED: &str = "onBarcodesDetected";

/// Name under which camera readiness is delivered
pub const EVENT_ON_CAMERA_READY: &str = "onCameraReady";

/// Name under which camera startup failures are delivered
pub const EVENT_ON_MOUNT_ERROR: &str = "onMountError";

/// Window within which an identical payload for the same target is dropped
/// by [`ThrottledSink`](crate::throttle::ThrottledSink)
pub const EVENT_THROTTLE_WINDOW: Duration = Duration::from_millis(100);

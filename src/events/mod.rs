// SPDX-License-Identifier: GPL-3.0-only

//! Camera view events
//!
//! Pooled, single-use event types delivered to the UI through an
//! [`EventSink`]:
//!
//! - [`BarcodesDetectedEvent`]: barcodes found in one analyzed frame
//! - [`CameraReadyEvent`]: the camera view became operational
//! - [`CameraMountErrorEvent`]: the camera view failed to start
//!
//! Each type keeps a small static pool of spent shells. `obtain` reuses one
//! when available, and `dispatch` consumes the event, hands the serialized
//! payload to the sink, and recycles the shell.

pub mod barcodes_detected;
pub mod camera_ready;
pub mod mount_error;
pub mod pool;
pub mod sink;

pub use barcodes_detected::BarcodesDetectedEvent;
pub use camera_ready::CameraReadyEvent;
pub use mount_error::CameraMountErrorEvent;
pub use pool::EventPool;
pub use sink::EventSink;

//! Capture module for camera enumeration and frame capture
//!
//! The registry and the session are generic over `CameraBackend`; the
//! application uses `NokhwaBackend`, tests use an in-memory backend.

pub mod backend;
pub mod camera;
pub mod error;
pub mod frame;
pub mod registry;
pub mod session;

#[cfg(test)]
pub mod testing;

pub use backend::CameraBackend;
pub use camera::NokhwaBackend;
pub use error::{CameraError, CameraResult};
pub use frame::Frame;
pub use registry::DeviceRegistry;
pub use session::CaptureSession;

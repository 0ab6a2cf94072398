//! Seams between the capture layer and a concrete camera library.

use super::error::BackendError;
use super::frame::Frame;

/// A camera library able to enumerate and open devices.
///
/// Device positions are the indices of the list returned by `enumerate`.
pub trait CameraBackend {
    type Handle: DeviceHandle;

    /// Human-readable names of the attached devices, in a stable order
    fn enumerate(&self) -> Result<Vec<String>, BackendError>;

    /// Open the device at `index` and start streaming from it
    fn open(&self, index: usize) -> Result<Self::Handle, BackendError>;
}

/// An open connection to one camera.
pub trait DeviceHandle {
    /// Block until one frame is available
    fn read(&mut self) -> Result<Frame, BackendError>;

    /// Stop streaming and give the device back to the system.
    ///
    /// Called at most once per handle by the capture session.
    fn release(&mut self);
}

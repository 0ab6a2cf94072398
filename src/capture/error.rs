//! Error types for the capture layer.

use thiserror::Error;

/// Raw failure reported by a camera backend.
///
/// Backends translate their library-specific errors into this type so that
/// nothing downstream depends on the capture library's error enum.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct BackendError(pub String);

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors surfaced by the device registry and the capture session.
#[derive(Debug, Clone, Error)]
pub enum CameraError {
    /// Enumeration returned nothing, or the backend could not enumerate at all
    #[error("no camera device found")]
    NoDeviceFound,
    /// The device could not be opened (removed, busy, permission denied)
    #[error("camera {index} is unavailable: {reason}")]
    DeviceUnavailable { index: usize, reason: String },
    /// No frame could be read from the open device
    #[error("failed to read a frame: {0}")]
    ReadFailure(String),
}

pub type CameraResult<T> = Result<T, CameraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_unavailable_message_names_index() {
        let err = CameraError::DeviceUnavailable {
            index: 2,
            reason: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "camera 2 is unavailable: busy");
    }
}

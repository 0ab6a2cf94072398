//! Camera backend built on nokhwa.
//!
//! Devices are addressed by their position in the enumeration order; the
//! position is mapped back to nokhwa's own `CameraIndex` at open time.

use log::{debug, warn};
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, CameraInfo, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

use super::backend::{CameraBackend, DeviceHandle};
use super::error::BackendError;
use super::frame::Frame;

/// Backend that talks to the platform's native capture API.
#[derive(Debug, Clone, Copy, Default)]
pub struct NokhwaBackend;

impl NokhwaBackend {
    pub fn new() -> Self {
        Self
    }

    fn query() -> Result<Vec<CameraInfo>, BackendError> {
        nokhwa::query(ApiBackend::Auto)
            .map_err(|e| BackendError::new(format!("Failed to query cameras: {}", e)))
    }
}

impl CameraBackend for NokhwaBackend {
    type Handle = NokhwaHandle;

    fn enumerate(&self) -> Result<Vec<String>, BackendError> {
        let devices = Self::query()?;
        Ok(devices.iter().map(|d| d.human_name()).collect())
    }

    fn open(&self, index: usize) -> Result<NokhwaHandle, BackendError> {
        let devices = Self::query()?;
        let info = devices
            .get(index)
            .ok_or_else(|| BackendError::new(format!("Camera {} is no longer attached", index)))?;

        let mut camera = open_with_fallback(info.index())?;
        camera
            .open_stream()
            .map_err(|e| BackendError::new(format!("Failed to start stream: {}", e)))?;

        let resolution = camera.resolution();
        debug!(
            "Opened '{}' at {}x{} @ {} fps",
            info.human_name(),
            resolution.width(),
            resolution.height(),
            camera.frame_rate()
        );

        Ok(NokhwaHandle {
            camera: Some(camera),
        })
    }
}

/// Prefer the highest frame rate, then the highest resolution, then anything.
fn open_with_fallback(index: &CameraIndex) -> Result<Camera, BackendError> {
    let attempts = [
        RequestedFormatType::AbsoluteHighestFrameRate,
        RequestedFormatType::AbsoluteHighestResolution,
        RequestedFormatType::None,
    ];

    let mut last_error = String::from("no format attempted");
    for requested in attempts {
        match Camera::new(index.clone(), RequestedFormat::new::<RgbFormat>(requested)) {
            Ok(camera) => return Ok(camera),
            Err(e) => {
                debug!("Camera {} rejected {:?}: {}", index, requested, e);
                last_error = e.to_string();
            }
        }
    }
    Err(BackendError::new(last_error))
}

/// A streaming nokhwa camera.
pub struct NokhwaHandle {
    camera: Option<Camera>,
}

impl DeviceHandle for NokhwaHandle {
    fn read(&mut self) -> Result<Frame, BackendError> {
        let camera = self
            .camera
            .as_mut()
            .ok_or_else(|| BackendError::new("camera already released"))?;

        let buffer = camera.frame().map_err(|e| BackendError::new(e.to_string()))?;
        let resolution = buffer.resolution();
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| BackendError::new(format!("Failed to decode frame: {}", e)))?;

        Frame::from_raw(resolution.width(), resolution.height(), decoded.into_raw())
            .ok_or_else(|| BackendError::new("decoded frame does not match its resolution"))
    }

    fn release(&mut self) {
        if let Some(mut camera) = self.camera.take() {
            if let Err(e) = camera.stop_stream() {
                warn!("Failed to stop camera stream: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_lists_named_devices() {
        // This test may fail in CI environments without a camera
        if let Ok(names) = NokhwaBackend::new().enumerate() {
            for name in &names {
                println!("Camera: {}", name);
                assert!(!name.is_empty());
            }
        }
    }

    #[test]
    fn test_open_out_of_range_fails() {
        assert!(NokhwaBackend::new().open(usize::MAX).is_err());
    }
}

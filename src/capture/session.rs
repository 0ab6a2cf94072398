//! Capture session: the single open device handle.

use log::{debug, info, warn};

use super::backend::{CameraBackend, DeviceHandle};
use super::error::{CameraError, CameraResult};
use super::frame::Frame;

struct OpenDevice<H> {
    index: usize,
    handle: H,
}

/// Owns at most one open device handle at any time.
pub struct CaptureSession<B: CameraBackend> {
    backend: B,
    current: Option<OpenDevice<B::Handle>>,
}

impl<B: CameraBackend> CaptureSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// Open device `index`.
    ///
    /// Any handle that is still open is released first, so this never leaks
    /// a handle. On failure the session is left without a device.
    pub fn open(&mut self, index: usize) -> CameraResult<()> {
        self.release();

        match self.backend.open(index) {
            Ok(handle) => {
                info!("Opened camera {}", index);
                self.current = Some(OpenDevice { index, handle });
                Ok(())
            }
            Err(e) => {
                warn!("Failed to open camera {}: {}", index, e);
                Err(CameraError::DeviceUnavailable {
                    index,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Release the current device, then open `index`
    pub fn switch(&mut self, index: usize) -> CameraResult<()> {
        debug!("Switching camera {:?} -> {}", self.active_index(), index);
        self.release();
        self.open(index)
    }

    /// Blocking read of exactly one frame from the open device
    pub fn read_frame(&mut self) -> CameraResult<Frame> {
        let device = self
            .current
            .as_mut()
            .ok_or_else(|| CameraError::ReadFailure("no camera is open".to_string()))?;

        device
            .handle
            .read()
            .map_err(|e| CameraError::ReadFailure(e.to_string()))
    }

    /// Release the open handle, if any. Calling it again is a no-op.
    pub fn release(&mut self) {
        if let Some(mut device) = self.current.take() {
            device.handle.release();
            debug!("Released camera {}", device.index);
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.current.as_ref().map(|d| d.index)
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

impl<B: CameraBackend> Drop for CaptureSession<B> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::testing::{device_tag, FakeBackend};

    fn session_with(names: &[&str]) -> (FakeBackend, CaptureSession<FakeBackend>) {
        let backend = FakeBackend::with_devices(names);
        let session = CaptureSession::new(backend.clone());
        (backend, session)
    }

    #[test]
    fn test_switch_releases_previous_device_once() {
        let (backend, mut session) = session_with(&["Cam0", "Cam1"]);
        session.open(0).unwrap();
        session.switch(1).unwrap();

        assert_eq!(session.active_index(), Some(1));
        assert_eq!(backend.release_count(0), 1);
        assert_eq!(backend.release_count(1), 0);
        assert_eq!(backend.open_handles(), 1);
    }

    #[test]
    fn test_switch_reads_only_from_new_device() {
        let (_backend, mut session) = session_with(&["Cam0", "Cam1", "Cam2"]);
        session.open(0).unwrap();
        assert_eq!(device_tag(&session.read_frame().unwrap()), 0);

        for index in [2, 1, 0, 2] {
            session.switch(index).unwrap();
            let frame = session.read_frame().unwrap();
            assert_eq!(device_tag(&frame), index);
        }
    }

    #[test]
    fn test_open_twice_never_holds_two_handles() {
        let (backend, mut session) = session_with(&["Cam0", "Cam1"]);
        session.open(0).unwrap();
        session.open(1).unwrap();
        assert_eq!(backend.open_handles(), 1);
        assert_eq!(backend.max_open_handles(), 1);
    }

    #[test]
    fn test_failed_open_leaves_session_idle() {
        let (backend, mut session) = session_with(&["Cam0", "Cam1"]);
        backend.set_unavailable(1, true);
        session.open(0).unwrap();

        let err = session.switch(1).unwrap_err();
        assert!(matches!(err, CameraError::DeviceUnavailable { index: 1, .. }));
        assert!(!session.is_open());
        assert_eq!(session.active_index(), None);
        assert_eq!(backend.release_count(0), 1);
        assert!(matches!(
            session.read_frame(),
            Err(CameraError::ReadFailure(_))
        ));
    }

    #[test]
    fn test_read_failure_is_translated() {
        let (backend, mut session) = session_with(&["Cam0"]);
        session.open(0).unwrap();
        backend.set_read_failing(0, true);
        assert!(matches!(
            session.read_frame(),
            Err(CameraError::ReadFailure(_))
        ));
        assert!(session.is_open());
    }

    #[test]
    fn test_release_is_idempotent() {
        let (backend, mut session) = session_with(&["Cam0"]);
        session.open(0).unwrap();
        session.release();
        session.release();
        assert_eq!(backend.release_count(0), 1);
        assert!(!session.is_open());
    }

    #[test]
    fn test_drop_releases_handle() {
        let (backend, mut session) = session_with(&["Cam0"]);
        session.open(0).unwrap();
        drop(session);
        assert_eq!(backend.release_count(0), 1);
        assert_eq!(backend.open_handles(), 0);
    }
}

//! Application state types
//!
//! Everything the UI callbacks mutate lives here, independent of GTK.

use log::info;
use std::path::{Path, PathBuf};

use crate::capture::{
    CameraBackend, CameraError, CameraResult, CaptureSession, DeviceRegistry, Frame,
    NokhwaBackend,
};
use crate::export::{save_frame, ExportError};
use crate::render::{OverlayState, RenderLoop, RenderState};

/// Main application state
pub struct AppState<B: CameraBackend + Clone = NokhwaBackend> {
    /// Cached device names
    pub registry: DeviceRegistry<B>,
    /// The one open camera
    pub session: CaptureSession<B>,
    /// Whether guide-lines are drawn on the preview
    pub overlay: OverlayState,
    /// Tick state machine and counters
    pub render: RenderLoop,
}

impl<B: CameraBackend + Clone> AppState<B> {
    /// Enumerate devices and build the state.
    ///
    /// Fails with `NoDeviceFound` before any device is opened, so callers can
    /// exit without creating a window.
    pub fn bootstrap(backend: B) -> CameraResult<Self> {
        let mut registry = DeviceRegistry::new(backend.clone());
        registry.list_devices()?;

        Ok(Self {
            registry,
            session: CaptureSession::new(backend),
            overlay: OverlayState::default(),
            render: RenderLoop::new(),
        })
    }

    /// Open the first enumerated device
    pub fn start(&mut self) -> CameraResult<&str> {
        self.select_device(0)
    }

    /// Switch the session to the device at `index` and return its name
    pub fn select_device(&mut self, index: usize) -> CameraResult<&str> {
        if index >= self.registry.len() {
            return Err(CameraError::DeviceUnavailable {
                index,
                reason: "not in the device list".to_string(),
            });
        }

        self.session.switch(index)?;
        Ok(self.registry.name(index).unwrap_or_default())
    }

    /// Switch to the first device called `name`
    pub fn select_device_named(&mut self, name: &str) -> CameraResult<usize> {
        let index = self
            .registry
            .index_of(name)
            .ok_or_else(|| CameraError::DeviceUnavailable {
                index: self.registry.len(),
                reason: format!("'{}' is not in the device list", name),
            })?;

        self.select_device(index)?;
        Ok(index)
    }

    /// Re-enumerate devices. The open device is left as it is.
    pub fn refresh_devices(&mut self) -> CameraResult<Vec<String>> {
        self.registry.refresh().map(<[String]>::to_vec)
    }

    pub fn set_overlay(&mut self, enabled: bool) {
        self.overlay.set_enabled(enabled);
    }

    /// One render tick: the frame to publish, if any
    pub fn tick(&mut self) -> Option<Frame> {
        self.render.tick(&mut self.session, self.overlay)
    }

    pub fn render_state(&self) -> RenderState {
        self.render.state()
    }

    /// Save a fresh frame to `path`; `None` is a cancelled dialog
    pub fn export_frame(&mut self, path: Option<&Path>) -> Result<Option<PathBuf>, ExportError> {
        save_frame(&mut self.session, path)
    }

    /// Name of the open device
    pub fn active_device_name(&self) -> Option<&str> {
        self.session
            .active_index()
            .and_then(|index| self.registry.name(index))
    }

    /// Row the device picker should show.
    ///
    /// `None` while no device is open, or when the open device is no longer
    /// in the cached list. A picker with no selected row reports every
    /// choice, including the device that just failed, so it can be retried.
    pub fn picker_selection(&self) -> Option<usize> {
        self.session
            .active_index()
            .filter(|index| *index < self.registry.len())
    }

    /// Release the camera before the process exits
    pub fn shutdown(&mut self) {
        if let Some(name) = self.active_device_name() {
            info!(
                "Releasing '{}' after {} frame(s), {} dropped",
                name,
                self.render.rendered(),
                self.render.dropped()
            );
        }
        self.session.release();
    }
}

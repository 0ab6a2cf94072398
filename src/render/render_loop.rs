//! Per-tick frame pipeline: read, overlay, hand back for display.
//!
//! The GTK side schedules `tick` on the main loop and publishes whatever
//! frame it returns; this type holds only the state machine and counters.

use log::{debug, info};

use super::overlay::{apply_overlay, OverlayState};
use crate::capture::{CameraBackend, CaptureSession, Frame};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// No device is open
    #[default]
    Idle,
    /// A device is open and frames are being pulled every tick
    Streaming,
}

#[derive(Debug, Default)]
pub struct RenderLoop {
    state: RenderState,
    ticks: u64,
    rendered: u64,
    dropped: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one tick against the session.
    ///
    /// Returns the frame to publish, or `None` when there is nothing new to
    /// show (no device, or the read failed and this tick is skipped).
    pub fn tick<B: CameraBackend>(
        &mut self,
        session: &mut CaptureSession<B>,
        overlay: OverlayState,
    ) -> Option<Frame> {
        self.ticks += 1;

        if !session.is_open() {
            if self.state == RenderState::Streaming {
                info!("Preview idle: no camera open");
            }
            self.state = RenderState::Idle;
            return None;
        }

        if self.state == RenderState::Idle {
            info!("Preview streaming from camera {:?}", session.active_index());
            self.state = RenderState::Streaming;
        }

        match session.read_frame() {
            Ok(raw) => {
                self.rendered += 1;
                if overlay.is_enabled() {
                    Some(apply_overlay(&raw))
                } else {
                    Some(raw)
                }
            }
            Err(e) => {
                self.dropped += 1;
                debug!("Skipping tick {}: {}", self.ticks, e);
                None
            }
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn rendered(&self) -> u64 {
        self.rendered
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

//! In-memory camera backend used by unit tests.
//!
//! Every frame read from device `i` is filled with `[i, 40, 80]`, so tests
//! can tell which device produced it with `device_tag`.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::backend::{CameraBackend, DeviceHandle};
use super::error::BackendError;
use super::frame::Frame;

pub const FRAME_WIDTH: u32 = 8;
pub const FRAME_HEIGHT: u32 = 6;

#[derive(Default)]
struct FakeState {
    devices: Vec<String>,
    enumeration_fails: bool,
    unavailable: HashSet<usize>,
    read_failing: HashSet<usize>,
    releases: HashMap<usize, usize>,
    open_handles: usize,
    max_open_handles: usize,
    reads: usize,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<FakeState>>,
}

impl FakeBackend {
    pub fn with_devices(names: &[&str]) -> Self {
        let backend = Self::default();
        backend.set_devices(names);
        backend
    }

    pub fn set_devices(&self, names: &[&str]) {
        self.state.borrow_mut().devices = names.iter().map(|n| n.to_string()).collect();
    }

    pub fn fail_enumeration(&self, fails: bool) {
        self.state.borrow_mut().enumeration_fails = fails;
    }

    pub fn set_unavailable(&self, index: usize, unavailable: bool) {
        let mut state = self.state.borrow_mut();
        if unavailable {
            state.unavailable.insert(index);
        } else {
            state.unavailable.remove(&index);
        }
    }

    pub fn set_read_failing(&self, index: usize, failing: bool) {
        let mut state = self.state.borrow_mut();
        if failing {
            state.read_failing.insert(index);
        } else {
            state.read_failing.remove(&index);
        }
    }

    pub fn release_count(&self, index: usize) -> usize {
        self.state
            .borrow()
            .releases
            .get(&index)
            .copied()
            .unwrap_or(0)
    }

    pub fn open_handles(&self) -> usize {
        self.state.borrow().open_handles
    }

    pub fn max_open_handles(&self) -> usize {
        self.state.borrow().max_open_handles
    }

    pub fn reads(&self) -> usize {
        self.state.borrow().reads
    }
}

impl CameraBackend for FakeBackend {
    type Handle = FakeHandle;

    fn enumerate(&self) -> Result<Vec<String>, BackendError> {
        let state = self.state.borrow();
        if state.enumeration_fails {
            return Err(BackendError::new("enumeration failed"));
        }
        Ok(state.devices.clone())
    }

    fn open(&self, index: usize) -> Result<FakeHandle, BackendError> {
        let mut state = self.state.borrow_mut();
        if index >= state.devices.len() || state.unavailable.contains(&index) {
            return Err(BackendError::new("device busy"));
        }
        state.open_handles += 1;
        state.max_open_handles = state.max_open_handles.max(state.open_handles);
        Ok(FakeHandle {
            index,
            state: Rc::clone(&self.state),
            released: false,
        })
    }
}

pub struct FakeHandle {
    index: usize,
    state: Rc<RefCell<FakeState>>,
    released: bool,
}

impl DeviceHandle for FakeHandle {
    fn read(&mut self) -> Result<Frame, BackendError> {
        let mut state = self.state.borrow_mut();
        state.reads += 1;
        if self.released || state.read_failing.contains(&self.index) {
            return Err(BackendError::new("no frame"));
        }
        Ok(Frame::filled(
            FRAME_WIDTH,
            FRAME_HEIGHT,
            [self.index as u8, 40, 80],
        ))
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let mut state = self.state.borrow_mut();
        state.open_handles -= 1;
        *state.releases.entry(self.index).or_insert(0) += 1;
    }
}

/// Index of the device that produced `frame`
pub fn device_tag(frame: &Frame) -> usize {
    frame.pixel(0, 0)[0] as usize
}

//! Device registry: the cached list of attached cameras.

use log::{debug, warn};

use super::backend::CameraBackend;
use super::error::{CameraError, CameraResult};

/// Ordered, de-duplicated list of camera names.
pub struct DeviceRegistry<B: CameraBackend> {
    backend: B,
    devices: Vec<String>,
}

impl<B: CameraBackend> DeviceRegistry<B> {
    /// Create an empty registry; call `list_devices` to populate it
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            devices: Vec::new(),
        }
    }

    /// Query the backend and cache the result.
    ///
    /// An empty result and an enumeration failure are both `NoDeviceFound`.
    /// On failure the previously cached list is left untouched.
    pub fn list_devices(&mut self) -> CameraResult<&[String]> {
        let names = self.backend.enumerate().map_err(|e| {
            warn!("Camera enumeration failed: {}", e);
            CameraError::NoDeviceFound
        })?;

        if names.is_empty() {
            return Err(CameraError::NoDeviceFound);
        }

        self.devices = make_unique(names);
        debug!("Found {} camera(s): {:?}", self.devices.len(), self.devices);
        Ok(&self.devices)
    }

    /// Re-query the backend, replacing the cached list.
    ///
    /// The open device is not reconciled against the new list.
    pub fn refresh(&mut self) -> CameraResult<&[String]> {
        self.list_devices()
    }

    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.devices.get(index).map(String::as_str)
    }

    /// Position of the first device called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.devices.iter().position(|d| d == name)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

/// Suffix repeated names with " (2)", " (3)", ... in enumeration order.
fn make_unique(names: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let mut candidate = name.clone();
        let mut n = 2;
        while unique.contains(&candidate) {
            candidate = format!("{} ({})", name, n);
            n += 1;
        }
        unique.push(candidate);
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::testing::FakeBackend;

    #[test]
    fn test_list_devices_caches_names() {
        let backend = FakeBackend::with_devices(&["Cam0", "Cam1"]);
        let mut registry = DeviceRegistry::new(backend);
        let names = registry.list_devices().unwrap().to_vec();
        assert_eq!(names, vec!["Cam0", "Cam1"]);
        assert_eq!(registry.index_of("Cam1"), Some(1));
        assert_eq!(registry.name(0), Some("Cam0"));
        assert_eq!(registry.name(2), None);
    }

    #[test]
    fn test_empty_enumeration_is_no_device_found() {
        let mut registry = DeviceRegistry::new(FakeBackend::with_devices(&[]));
        assert!(matches!(
            registry.list_devices(),
            Err(CameraError::NoDeviceFound)
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_enumeration_error_is_no_device_found() {
        let backend = FakeBackend::with_devices(&["Cam0"]);
        backend.fail_enumeration(true);
        let mut registry = DeviceRegistry::new(backend);
        assert!(matches!(
            registry.list_devices(),
            Err(CameraError::NoDeviceFound)
        ));
    }

    #[test]
    fn test_refresh_replaces_list() {
        let backend = FakeBackend::with_devices(&["Cam0"]);
        let mut registry = DeviceRegistry::new(backend.clone());
        registry.list_devices().unwrap();

        backend.set_devices(&["Cam0", "USB Camera"]);
        let names = registry.refresh().unwrap().to_vec();
        assert_eq!(names, vec!["Cam0", "USB Camera"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_list() {
        let backend = FakeBackend::with_devices(&["Cam0", "Cam1"]);
        let mut registry = DeviceRegistry::new(backend.clone());
        registry.list_devices().unwrap();

        backend.set_devices(&[]);
        assert!(registry.refresh().is_err());
        assert_eq!(registry.devices(), ["Cam0", "Cam1"]);
    }

    #[test]
    fn test_duplicate_names_are_disambiguated() {
        let backend = FakeBackend::with_devices(&["Webcam", "Webcam", "Webcam"]);
        let mut registry = DeviceRegistry::new(backend);
        let names = registry.list_devices().unwrap().to_vec();
        assert_eq!(names, vec!["Webcam", "Webcam (2)", "Webcam (3)"]);
        assert_eq!(registry.index_of("Webcam (2)"), Some(1));
    }
}

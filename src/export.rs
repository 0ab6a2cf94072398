//! Saving a single frame to disk as PNG.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::info;
use thiserror::Error;

use crate::capture::{CameraBackend, CameraError, CaptureSession};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Capture(#[from] CameraError),
    #[error("failed to write PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Force a `.png` extension onto `path`.
pub fn with_png_extension(path: &Path) -> PathBuf {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        path.to_path_buf()
    } else {
        path.with_extension("png")
    }
}

/// Read one fresh frame from `session` and write it to `path`.
///
/// `None` means the user cancelled the save dialog: nothing is read or
/// written. On a failed read no file is created. Existing files are
/// overwritten. Returns the path actually written.
pub fn save_frame<B: CameraBackend>(
    session: &mut CaptureSession<B>,
    path: Option<&Path>,
) -> Result<Option<PathBuf>, ExportError> {
    let Some(path) = path else {
        return Ok(None);
    };

    let frame = session.read_frame()?;
    let path = with_png_extension(path);
    frame.image().save_with_format(&path, ImageFormat::Png)?;

    info!(
        "Saved {}x{} frame to {:?}",
        frame.width(),
        frame.height(),
        path
    );
    Ok(Some(path))
}
